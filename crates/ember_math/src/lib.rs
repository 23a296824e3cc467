// Re-export glam for convenience
pub use glam::*;

// Ember math types
mod interval;
mod ray;
mod transform;

pub use interval::Interval;
pub use ray::{Ray, SURFACE_EPSILON};
pub use transform::RotationY;
