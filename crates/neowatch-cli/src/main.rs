use anyhow::Result;
use clap::{Parser, Subcommand};
use neowatch_core::{ImpactRequest, estimate, sample_orbit};
use neowatch_data::NeoClient;
use neowatch_server::{ServerConfig, run_server};
use std::path::PathBuf;
use tracing_subscriber;

#[derive(Parser)]
#[command(name = "neowatch")]
#[command(about = "Near-Earth-object risk dashboard backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard API server
    Serve {
        /// HTTP server port
        #[arg(short, long, default_value = "7878")]
        port: u16,

        /// NASA API key (falls back to NASA_API_KEY, then DEMO_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Directory with the built web client, served for non-API paths
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Seed for the synthetic risk timeline
        #[arg(long, default_value = "42")]
        timeline_seed: u64,
    },

    /// Estimate impact consequences for one scenario
    Impact {
        /// Asteroid diameter (km)
        #[arg(short, long)]
        size: f64,

        /// Impact velocity (km/s)
        #[arg(short, long)]
        velocity: f64,

        /// Impact site label
        #[arg(short, long, default_value = "Unspecified")]
        location: String,
    },

    /// Dump the display-orbit samples as JSON
    Trajectory {
        /// Pretty-print the output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Fetch and list the coming week's NEO close approaches
    Neos {
        /// NASA API key (falls back to NASA_API_KEY, then DEMO_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, api_key, static_dir, timeline_seed } => {
            let mut config = ServerConfig {
                port,
                static_dir,
                timeline_seed,
                ..Default::default()
            };
            if let Some(key) = api_key {
                config.api_key = key;
            }

            println!("Starting neowatch server...");
            println!("  Port: {}", config.port);
            println!("  URL: http://localhost:{}/api/health", config.port);

            run_server(config).await?;
        }

        Commands::Impact { size, velocity, location } => {
            let request = ImpactRequest {
                size_km: size,
                velocity_km_s: velocity,
                location,
            };
            let result = estimate(&request)?;

            println!("Impact at {}:", result.impact_location);
            println!("  Crater diameter:   {} km", result.crater_diameter_km);
            println!("  TNT equivalent:    {} Mt", result.tnt_equivalent_megatons);
            println!("  Seismic magnitude: {}", result.seismic_magnitude);
            println!("  Casualty estimate: {}", result.casualties_estimate);
        }

        Commands::Trajectory { pretty } => {
            let points = sample_orbit();
            let json = if pretty {
                serde_json::to_string_pretty(&points)?
            } else {
                serde_json::to_string(&points)?
            };
            println!("{}", json);
        }

        Commands::Neos { api_key } => {
            let key = api_key
                .or_else(|| std::env::var("NASA_API_KEY").ok())
                .unwrap_or_else(|| "DEMO_KEY".to_string());

            let client = NeoClient::new(key);
            let asteroids = client.feed_or_fallback().await;

            println!("{:<24} {:>10} {:>10} {:>10} {:>8}",
                "Name", "Diam (km)", "Dist (AU)", "V (km/s)", "Risk");
            for a in &asteroids {
                println!("{:<24} {:>10.3} {:>10.4} {:>10.1} {:>8}",
                    a.name, a.diameter, a.distance, a.velocity, a.risk_level);
            }
        }
    }

    Ok(())
}
