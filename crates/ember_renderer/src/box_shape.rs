//! Axis-aligned box built from six rectangles.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable, HittableList},
    AxisRect, FlipNormals, Material,
};
use ember_math::{Interval, Ray, Vec3};

/// A closed axis-aligned box between two corners.
///
/// The faces on the `max` corner keep their positive-axis normals, the faces
/// on the `min` corner are flipped, so every normal points out of the box.
pub struct BoxShape {
    min: Vec3,
    max: Vec3,
    sides: HittableList,
}

impl BoxShape {
    /// Create a box spanning the corners `p0` and `p1` (in any order).
    pub fn new(p0: Vec3, p1: Vec3, material: Arc<dyn Material>) -> Self {
        let min = p0.min(p1);
        let max = p0.max(p1);
        debug_assert!(min.cmplt(max).all(), "box must have positive extent");

        let mut sides = HittableList::new();

        sides.add(Box::new(AxisRect::xy(min.x, max.x, min.y, max.y, max.z, material.clone())));
        sides.add(Box::new(FlipNormals::new(Box::new(AxisRect::xy(
            min.x,
            max.x,
            min.y,
            max.y,
            min.z,
            material.clone(),
        )))));

        sides.add(Box::new(AxisRect::xz(min.x, max.x, min.z, max.z, max.y, material.clone())));
        sides.add(Box::new(FlipNormals::new(Box::new(AxisRect::xz(
            min.x,
            max.x,
            min.z,
            max.z,
            min.y,
            material.clone(),
        )))));

        sides.add(Box::new(AxisRect::yz(min.y, max.y, min.z, max.z, max.x, material.clone())));
        sides.add(Box::new(FlipNormals::new(Box::new(AxisRect::yz(
            min.y, max.y, min.z, max.z, min.x, material,
        )))));

        Self { min, max, sides }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// The six faces.
    pub fn faces(&self) -> &HittableList {
        &self.sides
    }
}

impl Hittable for BoxShape {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.sides.hit(ray, ray_t)
    }
}
