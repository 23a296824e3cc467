// Rotation utilities for instancing primitives.
//
// Rotations about the Y axis are the only ones the tracer needs, so the
// sine and cosine are cached instead of building a full matrix.

use glam::Vec3;

/// A rotation about the +Y axis with precomputed sine and cosine.
///
/// Follows the right-handed convention used by `glam::Mat3::from_rotation_y`:
/// a positive angle takes +Z towards +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationY {
    sin_theta: f32,
    cos_theta: f32,
}

impl RotationY {
    /// Create a rotation from an angle in degrees.
    pub fn from_degrees(angle: f32) -> Self {
        let (sin_theta, cos_theta) = angle.to_radians().sin_cos();
        Self { sin_theta, cos_theta }
    }

    /// Rotate a vector by `+angle` (local to world).
    #[inline]
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * v.x + self.sin_theta * v.z,
            v.y,
            -self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }

    /// Rotate a vector by `-angle` (world to local).
    #[inline]
    pub fn inverse_rotate(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * v.x - self.sin_theta * v.z,
            v.y,
            self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }
}
