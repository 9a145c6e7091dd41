//! Impact consequence estimation
//!
//! Closed-form scaling relations evaluated once per request: crater
//! diameter, TNT-equivalent yield, seismic magnitude, casualty estimate.
//! Stateless and side-effect free.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpactError {
    /// Arithmetic produced a non-finite value. Cannot happen for positive
    /// size and velocity.
    #[error("non-finite result for size={size_km} km, velocity={velocity_km_s} km/s")]
    NonFinite { size_km: f64, velocity_km_s: f64 },
}

/// Impact scenario submitted by the dashboard.
///
/// Values are taken as given; out-of-range sizes or velocities are not
/// rejected here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImpactRequest {
    /// Asteroid diameter (km)
    #[serde(rename = "asteroid_size_km")]
    pub size_km: f64,
    /// Impact velocity (km/s)
    #[serde(rename = "impact_velocity_km_s")]
    pub velocity_km_s: f64,
    /// Display label for the impact site, echoed back unchanged
    #[serde(rename = "impact_location")]
    pub location: String,
}

/// Derived impact consequences (matches the dashboard's TypeScript schema)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub crater_diameter_km: f64,
    pub tnt_equivalent_megatons: f64,
    pub seismic_magnitude: f64,
    pub casualties_estimate: u64,
    pub impact_location: String,
    pub asteroid_size_km: f64,
    pub impact_velocity_km_s: f64,
}

/// Evaluate the impact scaling relations for one scenario.
///
/// Pure and idempotent: identical requests produce identical results.
pub fn estimate(request: &ImpactRequest) -> Result<ImpactResult, ImpactError> {
    let energy = kinetic_energy(request.size_km, request.velocity_km_s);

    let crater_km = (energy / CRATER_ENERGY_SCALE).powf(CRATER_EXPONENT) * CRATER_COEFFICIENT;
    let megatons = energy / JOULES_PER_MEGATON;
    let magnitude = energy.log10() - SEISMIC_OFFSET;

    if !crater_km.is_finite() || !megatons.is_finite() || !magnitude.is_finite() {
        return Err(ImpactError::NonFinite {
            size_km: request.size_km,
            velocity_km_s: request.velocity_km_s,
        });
    }

    // floor, never negative
    let casualties = (megatons * CASUALTIES_PER_MEGATON).floor().max(0.0) as u64;

    Ok(ImpactResult {
        crater_diameter_km: round_to(crater_km, 2),
        tnt_equivalent_megatons: round_to(megatons, 1),
        seismic_magnitude: round_to(magnitude, 1),
        casualties_estimate: casualties,
        impact_location: request.location.clone(),
        asteroid_size_km: request.size_km,
        impact_velocity_km_s: request.velocity_km_s,
    })
}

/// Kinetic-energy proxy: 0.5 × (S×3) × 2600 × (V×2).
///
/// A fixed contract, not mass×v² — see `constants`.
pub fn kinetic_energy(size_km: f64, velocity_km_s: f64) -> f64 {
    0.5 * (size_km * SIZE_FACTOR) * DENSITY * (velocity_km_s * VELOCITY_FACTOR)
}

/// Round half away from zero to `decimals` places
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
