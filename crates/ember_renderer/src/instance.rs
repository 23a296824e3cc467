//! Wrappers that place or reorient another primitive.
//!
//! Each wrapper moves the incoming ray into the wrapped primitive's local
//! frame, delegates, and moves the hit back. None of them scale, so `t`
//! from the local frame is valid in the world frame unchanged.

use crate::hittable::{HitRecord, Hittable};
use ember_math::{Interval, Ray, RotationY, Vec3};

/// Reverses the normal reported by the wrapped primitive.
///
/// Used for the inward-facing sides of boxes and rooms.
pub struct FlipNormals {
    inner: Box<dyn Hittable>,
}

impl FlipNormals {
    pub fn new(inner: Box<dyn Hittable>) -> Self {
        Self { inner }
    }
}

impl Hittable for FlipNormals {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.inner.hit(ray, ray_t).map(|mut rec| {
            rec.normal = -rec.normal;
            rec
        })
    }
}

/// Moves the wrapped primitive by a fixed offset.
pub struct Translate {
    inner: Box<dyn Hittable>,
    offset: Vec3,
}

impl Translate {
    pub fn new(inner: Box<dyn Hittable>, offset: Vec3) -> Self {
        Self { inner, offset }
    }
}

impl Hittable for Translate {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let local_ray = Ray {
            origin: ray.origin() - self.offset,
            ..*ray
        };

        self.inner.hit(&local_ray, ray_t).map(|mut rec| {
            rec.p += self.offset;
            rec
        })
    }
}

/// Rotates the wrapped primitive about the world Y axis.
pub struct RotateY {
    inner: Box<dyn Hittable>,
    rotation: RotationY,
}

impl RotateY {
    /// Rotate by `angle` degrees; positive angles turn +Z towards +X.
    pub fn new(inner: Box<dyn Hittable>, angle: f32) -> Self {
        Self {
            inner,
            rotation: RotationY::from_degrees(angle),
        }
    }
}

impl Hittable for RotateY {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let local_ray = Ray {
            origin: self.rotation.inverse_rotate(ray.origin()),
            direction: self.rotation.inverse_rotate(ray.direction()),
            ..*ray
        };

        self.inner.hit(&local_ray, ray_t).map(|mut rec| {
            rec.p = self.rotation.rotate(rec.p);
            rec.normal = self.rotation.rotate(rec.normal);
            rec
        })
    }
}
