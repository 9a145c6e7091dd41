//! NASA NeoWs feed client
//!
//! Queries the Near-Earth Object Web Service for the coming week and
//! reduces each object to the summary the dashboard renders. Upstream
//! failures degrade to a static fallback list so the listing endpoint
//! always answers.

use chrono::{Days, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// NeoWs API root
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Days of close-approach data requested per feed query
const FEED_WINDOW_DAYS: u64 = 7;

/// Maximum asteroids returned to the dashboard
const MAX_RESULTS: usize = 20;

#[derive(Error, Debug)]
pub enum NeoError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("NASA API error: {0}")]
    Api(String),
}

/// Risk bucket shown in the dashboard list.
///
/// Ordering follows declaration: `Low < Medium < High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify by average diameter (km) and miss distance (AU)
pub fn classify_risk(diameter_km: f64, distance_au: f64) -> RiskLevel {
    if diameter_km > 1.0 && distance_au < 0.1 {
        RiskLevel::High
    } else if diameter_km > 0.5 && distance_au < 0.2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Asteroid summary (matches the dashboard's TypeScript schema)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asteroid {
    pub id: String,
    pub name: String,
    /// Average of the min/max estimated diameter (km)
    pub diameter: f64,
    pub risk_level: RiskLevel,
    /// Miss distance (AU)
    pub distance: f64,
    /// Relative velocity (km/s)
    pub velocity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_potentially_hazardous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_approach_date: Option<String>,
}

// --- NeoWs response documents ------------------------------------------------
// Numeric approach fields arrive as strings; parsing happens in summarize().

#[derive(Debug, Deserialize)]
struct FeedResponse {
    near_earth_objects: HashMap<String, Vec<NeoObject>>,
}

#[derive(Debug, Deserialize)]
struct NeoObject {
    id: String,
    name: String,
    is_potentially_hazardous_asteroid: bool,
    estimated_diameter: EstimatedDiameter,
    close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Deserialize)]
struct EstimatedDiameter {
    kilometers: DiameterRange,
}

#[derive(Debug, Deserialize)]
struct DiameterRange {
    estimated_diameter_min: f64,
    estimated_diameter_max: f64,
}

#[derive(Debug, Deserialize)]
struct CloseApproach {
    close_approach_date: String,
    relative_velocity: RelativeVelocity,
    miss_distance: MissDistance,
}

#[derive(Debug, Deserialize)]
struct RelativeVelocity {
    kilometers_per_second: String,
}

#[derive(Debug, Deserialize)]
struct MissDistance {
    astronomical: String,
}

impl NeoObject {
    /// Reduce to a dashboard summary. Objects without a usable close
    /// approach entry are dropped.
    fn summarize(self) -> Option<Asteroid> {
        let approach = self.close_approach_data.into_iter().next()?;
        let distance = approach.miss_distance.astronomical.parse().ok()?;
        let velocity = approach
            .relative_velocity
            .kilometers_per_second
            .parse()
            .ok()?;

        let diameter = (self.estimated_diameter.kilometers.estimated_diameter_min
            + self.estimated_diameter.kilometers.estimated_diameter_max)
            / 2.0;

        Some(Asteroid {
            id: self.id,
            name: self.name.replace(['(', ')'], ""),
            diameter,
            risk_level: classify_risk(diameter, distance),
            distance,
            velocity,
            is_potentially_hazardous: Some(self.is_potentially_hazardous_asteroid),
            close_approach_date: Some(approach.close_approach_date),
        })
    }
}

/// Flatten a feed document into the sorted dashboard list
fn summarize_feed(feed: FeedResponse) -> Vec<Asteroid> {
    let mut asteroids: Vec<Asteroid> = feed
        .near_earth_objects
        .into_values()
        .flatten()
        .filter_map(NeoObject::summarize)
        .collect();

    // Highest risk first, nearest first within a bucket
    asteroids.sort_by(|a, b| {
        b.risk_level.cmp(&a.risk_level).then_with(|| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        })
    });
    asteroids.truncate(MAX_RESULTS);
    asteroids
}

/// NeoWs HTTP client
pub struct NeoClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl NeoClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the coming week's close approaches, reduced and sorted
    pub async fn fetch_feed(&self) -> Result<Vec<Asteroid>, NeoError> {
        let start = Utc::now().date_naive();
        let end = start + Days::new(FEED_WINDOW_DAYS);

        let url = format!("{}/feed", self.base_url);
        tracing::debug!("Fetching NEO feed {} .. {}", start, end);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
                ("api_key", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NeoError::Api(response.status().to_string()));
        }

        let feed: FeedResponse = response.json().await?;
        Ok(summarize_feed(feed))
    }

    /// Feed with degradation: any upstream failure serves the static
    /// fallback list instead of an error.
    pub async fn feed_or_fallback(&self) -> Vec<Asteroid> {
        match self.fetch_feed().await {
            Ok(asteroids) => asteroids,
            Err(err) => {
                tracing::warn!("NEO feed unavailable, serving fallback data: {err}");
                fallback_asteroids()
            }
        }
    }
}

/// Static listing served when the NeoWs feed is unreachable
pub fn fallback_asteroids() -> Vec<Asteroid> {
    vec![
        Asteroid {
            id: "1".to_string(),
            name: "2024 UY1".to_string(),
            diameter: 0.8,
            risk_level: RiskLevel::High,
            distance: 0.05,
            velocity: 20.3,
            is_potentially_hazardous: Some(true),
            close_approach_date: Some("2024-10-15".to_string()),
        },
        Asteroid {
            id: "2".to_string(),
            name: "2024 TX3".to_string(),
            diameter: 1.2,
            risk_level: RiskLevel::Medium,
            distance: 0.12,
            velocity: 18.7,
            is_potentially_hazardous: Some(false),
            close_approach_date: Some("2024-10-20".to_string()),
        },
        Asteroid {
            id: "3".to_string(),
            name: "2024 WZ5".to_string(),
            diameter: 0.4,
            risk_level: RiskLevel::Low,
            distance: 0.28,
            velocity: 15.2,
            is_potentially_hazardous: Some(false),
            close_approach_date: Some("2024-10-25".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"{
        "near_earth_objects": {
            "2024-10-01": [
                {
                    "id": "3542519",
                    "name": "(2010 PK9)",
                    "is_potentially_hazardous_asteroid": true,
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 1.1,
                            "estimated_diameter_max": 1.5
                        }
                    },
                    "close_approach_data": [
                        {
                            "close_approach_date": "2024-10-01",
                            "relative_velocity": { "kilometers_per_second": "19.42" },
                            "miss_distance": { "astronomical": "0.08" }
                        }
                    ]
                },
                {
                    "id": "2153306",
                    "name": "153306 (2001 JL1)",
                    "is_potentially_hazardous_asteroid": false,
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.2,
                            "estimated_diameter_max": 0.4
                        }
                    },
                    "close_approach_data": [
                        {
                            "close_approach_date": "2024-10-01",
                            "relative_velocity": { "kilometers_per_second": "7.05" },
                            "miss_distance": { "astronomical": "0.31" }
                        }
                    ]
                }
            ],
            "2024-10-02": [
                {
                    "id": "54016476",
                    "name": "(2020 GE)",
                    "is_potentially_hazardous_asteroid": false,
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.6,
                            "estimated_diameter_max": 0.8
                        }
                    },
                    "close_approach_data": [
                        {
                            "close_approach_date": "2024-10-02",
                            "relative_velocity": { "kilometers_per_second": "12.30" },
                            "miss_distance": { "astronomical": "0.15" }
                        }
                    ]
                },
                {
                    "id": "99999999",
                    "name": "(no approach data)",
                    "is_potentially_hazardous_asteroid": false,
                    "estimated_diameter": {
                        "kilometers": {
                            "estimated_diameter_min": 0.1,
                            "estimated_diameter_max": 0.2
                        }
                    },
                    "close_approach_data": []
                }
            ]
        }
    }"#;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_risk(1.1, 0.05), RiskLevel::High);
        assert_eq!(classify_risk(1.1, 0.15), RiskLevel::Medium);
        assert_eq!(classify_risk(0.6, 0.15), RiskLevel::Medium);
        assert_eq!(classify_risk(0.6, 0.25), RiskLevel::Low);
        assert_eq!(classify_risk(0.3, 0.01), RiskLevel::Low);
        // Thresholds are strict comparisons
        assert_eq!(classify_risk(1.0, 0.05), RiskLevel::Medium);
        assert_eq!(classify_risk(1.1, 0.1), RiskLevel::Medium);
        assert_eq!(classify_risk(0.5, 0.05), RiskLevel::Low);
    }

    #[test]
    fn test_summarize_feed() {
        let feed: FeedResponse = serde_json::from_str(SAMPLE_FEED).unwrap();
        let asteroids = summarize_feed(feed);

        // The empty-approach object is dropped
        assert_eq!(asteroids.len(), 3);

        // Sorted by risk: high (2010 PK9), medium (2020 GE), low (2001 JL1)
        assert_eq!(asteroids[0].id, "3542519");
        assert_eq!(asteroids[0].risk_level, RiskLevel::High);
        assert_eq!(asteroids[1].id, "54016476");
        assert_eq!(asteroids[1].risk_level, RiskLevel::Medium);
        assert_eq!(asteroids[2].id, "2153306");
        assert_eq!(asteroids[2].risk_level, RiskLevel::Low);

        // Parentheses stripped, string numerics parsed, diameters averaged
        assert_eq!(asteroids[0].name, "2010 PK9");
        assert_eq!(asteroids[2].name, "153306 2001 JL1");
        assert_eq!(asteroids[0].velocity, 19.42);
        assert_eq!(asteroids[0].distance, 0.08);
        assert_eq!(asteroids[0].diameter, 1.3);
        assert_eq!(asteroids[0].is_potentially_hazardous, Some(true));
        assert_eq!(
            asteroids[0].close_approach_date.as_deref(),
            Some("2024-10-01")
        );
    }

    #[test]
    fn test_distance_tiebreak_within_bucket() {
        let mut feed: FeedResponse = serde_json::from_str(SAMPLE_FEED).unwrap();
        // Force everything low-risk, then ordering is by distance alone
        for neos in feed.near_earth_objects.values_mut() {
            for neo in neos.iter_mut() {
                neo.estimated_diameter.kilometers.estimated_diameter_min = 0.01;
                neo.estimated_diameter.kilometers.estimated_diameter_max = 0.01;
            }
        }
        let asteroids = summarize_feed(feed);
        for pair in asteroids.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_fallback_shape() {
        let fallback = fallback_asteroids();
        assert_eq!(fallback.len(), 3);
        assert_eq!(fallback[0].risk_level, RiskLevel::High);

        let json = serde_json::to_value(&fallback).unwrap();
        assert_eq!(json[0]["riskLevel"], "high");
        assert_eq!(json[0]["isPotentiallyHazardous"], true);
        assert_eq!(json[0]["closeApproachDate"], "2024-10-15");
        assert_eq!(json[1]["name"], "2024 TX3");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(serde_json::from_str::<FeedResponse>(r#"{"elements": []}"#).is_err());
    }
}
