pub mod api;
pub mod error;
pub mod server;

pub use api::{AppState, create_router};
pub use error::ApiError;
pub use server::{ServerConfig, run_server};
