//! Thin-lens camera for primary ray generation.

use crate::sampling::random_in_unit_disk;
use ember_math::{Ray, Vec2, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Configured through the `with_*` builders; the cached basis is refreshed
/// after every change.
#[derive(Debug, Clone)]
pub struct Camera {
    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f32,                  // Vertical field of view in degrees
    aspect_ratio: f32,          // Width over height
    aperture: f32,              // Lens diameter, 0 for a pinhole
    focus_dist: Option<f32>,    // Defaults to |look_at - look_from|

    // Cached computed values
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        let mut camera = Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 1.0,
            aperture: 0.0,
            focus_dist: None,
            lower_left_corner: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            lens_radius: 0.0,
        };
        camera.initialize();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set lens settings: vertical field of view in degrees and aperture diameter.
    pub fn with_lens(mut self, vfov: f32, aperture: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture.max(0.0);
        self.initialize();
        self
    }

    /// Set the distance to the plane of perfect focus.
    pub fn with_focus_dist(mut self, focus_dist: f32) -> Self {
        self.focus_dist = Some(focus_dist);
        self.initialize();
        self
    }

    /// Set the image aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self.initialize();
        self
    }

    /// Image aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Distance to the plane of perfect focus.
    pub fn focus_dist(&self) -> f32 {
        self.focus_dist
            .unwrap_or_else(|| (self.look_at - self.look_from).length())
    }

    fn initialize(&mut self) {
        let focus_dist = self.focus_dist();

        // Camera basis: w points backwards, away from the target
        let w = (self.look_from - self.look_at)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        self.u = self.vup.cross(w).try_normalize().unwrap_or(Vec3::X);
        self.v = w.cross(self.u);

        let half_height = (self.vfov.to_radians() / 2.0).tan();
        let half_width = self.aspect_ratio * half_height;

        self.lower_left_corner = self.look_from
            - focus_dist * w
            - half_width * focus_dist * self.u
            - half_height * focus_dist * self.v;
        self.horizontal = 2.0 * half_width * focus_dist * self.u;
        self.vertical = 2.0 * half_height * focus_dist * self.v;
        self.lens_radius = self.aperture / 2.0;
    }

    /// Generate a ray through `image_point`, where `(0, 0)` is the lower-left
    /// corner of the image and `(1, 1)` the upper-right.
    ///
    /// The origin is jittered over the lens disk; the direction is normalized.
    pub fn generate_ray(&self, image_point: Vec2, rng: &mut dyn RngCore) -> Ray {
        let origin = if self.lens_radius > 0.0 {
            let lens = self.lens_radius * random_in_unit_disk(rng);
            self.look_from + lens.x * self.u + lens.y * self.v
        } else {
            self.look_from
        };

        let target = self.lower_left_corner
            + image_point.x * self.horizontal
            + image_point.y * self.vertical;

        let direction = (target - origin).try_normalize().unwrap_or(-Vec3::Z);
        Ray::new(origin, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_center_ray_hits_target() {
        let camera = Camera::new()
            .with_position(Vec3::new(3.0, 1.2, 5.0), Vec3::new(-0.5, 0.0, 0.0), Vec3::Y)
            .with_lens(24.0, 0.0)
            .with_aspect_ratio(16.0 / 9.0);
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.generate_ray(Vec2::new(0.5, 0.5), &mut rng);
        let expected = (Vec3::new(-0.5, 0.0, 0.0) - Vec3::new(3.0, 1.2, 5.0)).normalize();

        assert_eq!(ray.origin(), Vec3::new(3.0, 1.2, 5.0));
        assert!((ray.direction() - expected).length() < 1e-5);
    }

    #[test]
    fn test_corners_span_field_of_view() {
        let camera = Camera::new().with_lens(90.0, 0.0);
        let mut rng = StdRng::seed_from_u64(42);

        // 90 degree vfov, square aspect: the top edge is 45 degrees up
        let top = camera.generate_ray(Vec2::new(0.5, 1.0), &mut rng);
        assert!((top.direction() - Vec3::new(0.0, 1.0, -1.0).normalize()).length() < 1e-5);

        let lower_left = camera.generate_ray(Vec2::new(0.0, 0.0), &mut rng);
        assert!(lower_left.direction().x < 0.0);
        assert!(lower_left.direction().y < 0.0);
    }

    #[test]
    fn test_aperture_jitters_origin_but_keeps_focus() {
        let camera = Camera::new()
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0), Vec3::Y)
            .with_lens(40.0, 0.5);
        let mut rng = StdRng::seed_from_u64(3);
        assert!((camera.focus_dist() - 4.0).abs() < 1e-6);

        for _ in 0..50 {
            let ray = camera.generate_ray(Vec2::new(0.5, 0.5), &mut rng);
            // Origin stays on the lens disk
            assert!(ray.origin().length() <= 0.25 + 1e-6);
            assert_eq!(ray.origin().z, 0.0);

            // Every ray converges on the focus point
            let t = 4.0 / -ray.direction().z;
            assert!((ray.at(t) - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-4);
        }
    }

    #[test]
    fn test_explicit_focus_distance() {
        let camera = Camera::new()
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0), Vec3::Y)
            .with_focus_dist(10.0);
        assert_eq!(camera.focus_dist(), 10.0);
    }
}
