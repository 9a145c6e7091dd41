pub mod constants;
pub mod impact;
pub mod trajectory;

pub use impact::{ImpactError, ImpactRequest, ImpactResult, estimate};
pub use trajectory::{TrajectoryPoint, VisualElements, sample_orbit};
