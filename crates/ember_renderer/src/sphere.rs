//! Sphere primitive for ray tracing.

use std::f32::consts::PI;
use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use ember_math::{Interval, Ray, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        if radius <= 0.0 {
            log::warn!("Sphere at {:?} has non-positive radius {}, it will never be hit", center, radius);
        }

        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn get_sphere_uv(p: Vec3) -> (f32, f32) {
        // p is a point on the unit sphere centered at origin
        // theta: angle down from +Y
        // phi: angle around Y axis from +X
        let theta = (-p.y).clamp(-1.0, 1.0).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        let u = phi / (2.0 * PI);
        let v = theta / PI;
        (u, v)
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        // The final point is measured along the normalized direction
        let unit_direction = ray.direction().try_normalize()?;

        // Root search uses the raw direction
        let r_sq = self.radius * self.radius;
        let l = self.center - ray.origin();
        let s = l.dot(ray.direction());
        let l_sq = l.length_squared();
        let outside = l_sq > r_sq;

        // Outside and pointing away
        if s < 0.0 && outside {
            return None;
        }

        let m_sq = l_sq - s * s;
        if m_sq > r_sq {
            return None;
        }

        let q = (r_sq - m_sq).sqrt();
        let t = if outside && ray_t.surrounds(s - q) {
            s - q
        } else if ray_t.surrounds(s + q) {
            s + q
        } else {
            return None;
        };

        let p = ray.origin() + t * unit_direction;
        // Outward, even when the ray starts inside
        let normal = (p - self.center).try_normalize()?;
        let (u, v) = Self::get_sphere_uv(normal);

        Some(HitRecord {
            p,
            normal,
            material: self.material.as_ref(),
            u,
            v,
            t,
        })
    }
}
