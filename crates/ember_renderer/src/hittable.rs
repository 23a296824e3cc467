//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use ember_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// A miss is `None` rather than a record with `t = +inf`, so the point,
/// normal, and material of a miss can never be read.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, as reported by the primitive (not flipped
    /// towards the ray)
    pub normal: Vec3,
    /// Material at the intersection point, owned by the scene
    pub material: &'a dyn Material,
    /// Surface coordinates supplied by the primitive
    pub u: f32,
    pub v: f32,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("u", &self.u)
            .field("v", &self.v)
            .field("t", &self.t)
            .finish_non_exhaustive()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the closest intersection strictly inside `ray_t`.
    ///
    /// Returned `t` values are in the caller's frame, so results from
    /// different objects compare directly.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// An ordered list of hittable objects.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the end of the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// The objects in scan order.
    pub fn objects(&self) -> &[Box<dyn Hittable>] {
        &self.objects
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<HitRecord<'a>> = None;

        for object in &self.objects {
            // Shrinking the open interval makes a tie lose to the earlier object
            let interval = ray_t.with_max(closest.map_or(ray_t.max, |rec| rec.t));
            if let Some(rec) = object.hit(ray, interval) {
                closest = Some(rec);
            }
        }

        closest
    }
}
