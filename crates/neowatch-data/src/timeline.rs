//! Synthetic risk-trend timeline
//!
//! Six monthly samples with a seasonal swing on top of a random base.
//! Draws come from a seeded LCG so a given seed always produces the same
//! timeline.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Months covered by the timeline
pub const TIMELINE_MONTHS: usize = 6;

/// First month of the timeline
const BASE_YEAR: i32 = 2024;
const BASE_MONTH: u32 = 10;

/// One month of aggregate risk (matches the dashboard's TypeScript schema)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSample {
    /// Month as YYYY-MM
    pub date: String,
    pub risk_score: f64,
    pub asteroid_count: u32,
}

/// Generate the timeline for a seed (deterministic)
pub fn risk_timeline(seed: u64) -> Vec<RiskSample> {
    let mut rng = seed;
    let mut rand = || {
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (rng >> 33) as f64 / (u32::MAX as f64)
    };

    let base = NaiveDate::from_ymd_opt(BASE_YEAR, BASE_MONTH, 1).unwrap();

    (0..TIMELINE_MONTHS)
        .map(|i| {
            let month = base + Months::new(i as u32);
            let base_risk = rand() * 3.0 + 1.0;
            let variation = (i as f64 * 0.5).sin() * 1.5;
            let asteroid_count = (rand() * 10.0).floor() as u32 + 3;

            RiskSample {
                date: month.format("%Y-%m").to_string(),
                risk_score: (base_risk + variation).max(0.1),
                asteroid_count,
            }
        })
        .collect()
}
