pub mod neo;
pub mod news;
pub mod timeline;

pub use neo::{Asteroid, NeoClient, NeoError, RiskLevel, classify_risk, fallback_asteroids};
pub use news::{NewsItem, curated_news, latest_news};
pub use timeline::{RiskSample, risk_timeline};
