use crate::{Interval, Vec3};

/// Offset used for rays spawned from a surface so they do not
/// re-intersect the surface they left.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// A ray in 3D space with origin, direction, and a valid parametric range.
///
/// Rays represent the half-line `origin + t * direction` for `t` inside
/// `interval`. The direction is not required to be normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub interval: Interval,
}

impl Ray {
    /// Create a new ray valid over `[0, +inf)`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            interval: Interval::new(0.0, f32::INFINITY),
        }
    }

    /// Create a ray leaving a surface point.
    ///
    /// The interval starts at [`SURFACE_EPSILON`] to skip the surface itself.
    pub fn spawn(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            interval: Interval::new(SURFACE_EPSILON, f32::INFINITY),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the valid parametric range of the ray.
    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
