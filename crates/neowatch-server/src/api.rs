//! Dashboard HTTP API
//!
//! Every handler is stateless; shared state is an immutable `Arc` holding
//! the NeoWs client and the timeline seed. Request bodies are read as raw
//! strings and deserialized in the handler so malformed input surfaces as
//! the API's own error payload, not an extractor rejection.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::error::ApiError;
use neowatch_core::{ImpactRequest, ImpactResult, TrajectoryPoint, estimate, sample_orbit};
use neowatch_data::{Asteroid, NeoClient, NewsItem, RiskSample, latest_news, risk_timeline};

/// State shared across requests
pub struct AppState {
    pub neo: NeoClient,
    pub timeline_seed: u64,
}

/// Build the API router. `static_dir`, when given, serves the built web
/// client for any non-API path.
pub fn create_router(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
    let mut router = Router::new()
        .route("/api/calculate-impact", post(calculate_impact))
        .route("/api/calculate_trajectory", get(calculate_trajectory))
        .route("/api/asteroids", get(asteroids))
        .route("/api/risk-timeline", get(risk_timeline_handler))
        .route("/api/space-news", get(space_news))
        .route("/api/health", get(health))
        .route("/api/game-score", post(game_score))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }

    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// POST /api/calculate-impact
async fn calculate_impact(body: String) -> Result<Json<ImpactResult>, ApiError> {
    let request: ImpactRequest =
        serde_json::from_str(&body).map_err(|err| ApiError::InvalidRequest(err.to_string()))?;

    tracing::debug!(
        "Impact estimate: {} km at {} km/s ({})",
        request.size_km,
        request.velocity_km_s,
        request.location
    );

    Ok(Json(estimate(&request)?))
}

/// GET /api/calculate_trajectory
async fn calculate_trajectory() -> Json<Vec<TrajectoryPoint>> {
    Json(sample_orbit())
}

/// GET /api/asteroids — live feed, or the static fallback on upstream failure
async fn asteroids(State(state): State<Arc<AppState>>) -> Json<Vec<Asteroid>> {
    Json(state.neo.feed_or_fallback().await)
}

/// GET /api/risk-timeline
async fn risk_timeline_handler(State(state): State<Arc<AppState>>) -> Json<Vec<RiskSample>> {
    Json(risk_timeline(state.timeline_seed))
}

/// GET /api/space-news
async fn space_news() -> Json<Vec<NewsItem>> {
    Json(latest_news())
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
    version: &'static str,
}

/// GET /api/health
async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Score submitted by a mini-game
#[derive(Debug, Deserialize)]
pub struct ScoreSubmission {
    pub user_id: String,
    pub game_type: String,
    pub score: i64,
}

/// Rank derived from a submitted score. Nothing is stored.
#[derive(Debug, Serialize)]
pub struct ScoreRank {
    pub user_id: String,
    pub game_type: String,
    pub score: i64,
    pub level: i64,
    pub xp: i64,
    pub title: &'static str,
}

fn rank_score(submission: ScoreSubmission) -> ScoreRank {
    let title = if submission.score > 5000 {
        "Asteroid Expert"
    } else if submission.score > 2000 {
        "Space Defender"
    } else {
        "Cosmic Survivor"
    };

    ScoreRank {
        level: submission.score / 1000 + 1,
        xp: submission.score * 10,
        title,
        user_id: submission.user_id,
        game_type: submission.game_type,
        score: submission.score,
    }
}

/// POST /api/game-score
async fn game_score(body: String) -> Result<Json<ScoreRank>, ApiError> {
    let submission: ScoreSubmission =
        serde_json::from_str(&body).map_err(|err| ApiError::InvalidRequest(err.to_string()))?;
    Ok(Json(rank_score(submission)))
}
