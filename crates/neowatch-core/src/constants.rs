//! Fixed numeric contract shared with the dashboard UI.
//!
//! The impact terms are a simplified proxy, not dimensional physics. The
//! UI's result panels assume these exact values; do not recalibrate.

/// Size multiplier in the kinetic-energy proxy
pub const SIZE_FACTOR: f64 = 3.0;

/// Bulk density term in the kinetic-energy proxy (kg/m³)
pub const DENSITY: f64 = 2600.0;

/// Velocity multiplier in the kinetic-energy proxy
pub const VELOCITY_FACTOR: f64 = 2.0;

/// Energy normalization in the crater scaling law (J)
pub const CRATER_ENERGY_SCALE: f64 = 1e15;

/// Exponent of the crater scaling law
pub const CRATER_EXPONENT: f64 = 0.25;

/// Coefficient of the crater scaling law (km)
pub const CRATER_COEFFICIENT: f64 = 1.8;

/// Joules per megaton of TNT
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Offset subtracted from log10(energy) for the seismic magnitude
pub const SEISMIC_OFFSET: f64 = 4.8;

/// Casualties per megaton of TNT equivalent
pub const CASUALTIES_PER_MEGATON: f64 = 100_000.0;

/// Semi-major axis of the display orbit (AU)
pub const ORBIT_SEMI_MAJOR_AU: f64 = 1.5;

/// Eccentricity of the display orbit
pub const ORBIT_ECCENTRICITY: f64 = 0.1;

/// Inclination of the display orbit (degrees)
pub const ORBIT_INCLINATION_DEG: f64 = 5.0;

/// Points sampled along one display orbit
pub const ORBIT_SAMPLES: usize = 100;

/// Scene scale applied to the orbital-plane x axis
pub const SCENE_SCALE_X: f64 = 5.0;

/// Scene scale applied to the in-plane component of y
pub const SCENE_SCALE_Y: f64 = 0.5;

/// Scene scale applied to the out-of-plane component (z)
pub const SCENE_SCALE_Z: f64 = 5.0;
