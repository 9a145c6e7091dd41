//! Display-orbit sampling for the 3D view
//!
//! Samples one closed orbit from fixed Keplerian elements using the polar
//! equation r = a(1−e²)/(1+e·cosθ), then maps the orbital plane into scene
//! coordinates. This is a visual approximation, not a propagator: the
//! elements are constant and each call recomputes the same sequence.

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Keplerian shape elements of the display orbit
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VisualElements {
    /// Semi-major axis (AU)
    pub a: f64,
    /// Eccentricity (dimensionless, 0 = circular)
    pub e: f64,
    /// Inclination (radians)
    pub i: f64,
}

impl Default for VisualElements {
    fn default() -> Self {
        Self {
            a: ORBIT_SEMI_MAJOR_AU,
            e: ORBIT_ECCENTRICITY,
            i: ORBIT_INCLINATION_DEG.to_radians(),
        }
    }
}

impl VisualElements {
    /// Distance from focus at given true anomaly
    pub fn radius(&self, true_anomaly: f64) -> f64 {
        self.a * (1.0 - self.e * self.e) / (1.0 + self.e * true_anomaly.cos())
    }

    /// Sample `n` scene points along one orbit, ordered by phase.
    ///
    /// Point j covers true anomaly (j/n)·2π and carries time = j/n, the
    /// fractional orbital phase in [0, 1).
    pub fn sample(&self, n: usize) -> Vec<TrajectoryPoint> {
        (0..n)
            .map(|j| {
                let phase = j as f64 / n as f64;
                let theta = phase * 2.0 * std::f64::consts::PI;

                let r = self.radius(theta);
                let x_orbit = r * theta.cos();
                let y_orbit = r * theta.sin();

                TrajectoryPoint {
                    x: x_orbit * SCENE_SCALE_X,
                    y: y_orbit * self.i.cos() * SCENE_SCALE_Y,
                    z: y_orbit * self.i.sin() * SCENE_SCALE_Z,
                    time: phase,
                }
            })
            .collect()
    }
}

/// One sample of the display orbit, in scene coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Fractional orbital phase in [0, 1)
    pub time: f64,
}

/// Sample the fixed display orbit (a=1.5 AU, e=0.1, i=5°) at 100 points
pub fn sample_orbit() -> Vec<TrajectoryPoint> {
    VisualElements::default().sample(ORBIT_SAMPLES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exactly_100_points() {
        let points = sample_orbit();
        assert_eq!(points.len(), 100);
    }

    #[test]
    fn test_phase_ordering() {
        let points = sample_orbit();
        assert_eq!(points[0].time, 0.0);
        for pair in points.windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
        assert!(points.last().unwrap().time < 1.0);
    }

    #[test]
    fn test_deterministic_across_calls() {
        assert_eq!(sample_orbit(), sample_orbit());
    }

    #[test]
    fn test_first_point_at_perihelion() {
        // θ=0: r = a(1−e²)/(1+e) = a(1−e), x = r·5, y = z = 0
        let points = sample_orbit();
        let r_peri = 1.5 * (1.0 - 0.1);
        assert_relative_eq!(points[0].x, r_peri * 5.0, epsilon = 1e-12);
        assert_relative_eq!(points[0].y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(points[0].z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_aphelion_at_half_phase() {
        // j=50 → θ=π: r = a(1+e), on the −x side
        let points = sample_orbit();
        let p = points[50];
        let r_apo = 1.5 * (1.0 + 0.1);
        assert_relative_eq!(p.x, -r_apo * 5.0, epsilon = 1e-9);
        assert_relative_eq!(p.time, 0.5);
    }

    #[test]
    fn test_inclination_couples_y_and_z() {
        // y and z are both scaled projections of the in-plane y component,
        // so z/y = tan(i)·(5/0.5) wherever y ≠ 0.
        let inc = 5.0_f64.to_radians();
        for p in sample_orbit() {
            if p.y.abs() > 1e-9 {
                assert_relative_eq!(p.z / p.y, inc.tan() * 10.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_radius_circular() {
        let circular = VisualElements { a: 2.0, e: 0.0, i: 0.0 };
        for theta in [0.0, 1.0, 3.0, 6.0] {
            assert_relative_eq!(circular.radius(theta), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(sample_orbit()).unwrap();
        let first = &json[0];
        for key in ["x", "y", "z", "time"] {
            assert!(first.get(key).is_some(), "missing {key}");
        }
    }
}
