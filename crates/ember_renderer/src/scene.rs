//! Scene: the primitives to trace plus the background radiance.

use crate::{
    hittable::{HitRecord, Hittable, HittableList},
    Color,
};
use ember_math::{Interval, Ray};

/// Default background, a muted sky blue.
pub const DEFAULT_BACKGROUND: Color = Color::new(0.2, 0.3, 0.5);

/// An immutable-at-render-time collection of primitives.
///
/// Shared read-only across render threads.
pub struct Scene {
    objects: HittableList,
    background: Color,
}

impl Scene {
    /// Create an empty scene with the given background radiance.
    pub fn new(background: Color) -> Self {
        Self {
            objects: HittableList::new(),
            background,
        }
    }

    /// Add a primitive. Scan order only matters for exact ties.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.add(object);
    }

    /// Builder form of [`Scene::add`].
    pub fn with(mut self, object: Box<dyn Hittable>) -> Self {
        self.add(object);
        self
    }

    /// Radiance returned for rays that hit nothing.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Closest hit over all primitives, or `None` for a miss.
    ///
    /// Linear scan; on an exact tie the earlier primitive wins.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        self.objects.hit(ray, ray_t)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}
