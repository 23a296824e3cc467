//! Axis-aligned rectangle primitives.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use ember_math::{Interval, Ray, Vec3};

/// The coordinate plane a rectangle lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plane {
    Xy,
    Xz,
    Yz,
}

impl Plane {
    /// Indices of (fixed axis, first free axis, second free axis).
    #[inline]
    fn axes(self) -> (usize, usize, usize) {
        match self {
            Plane::Xy => (2, 0, 1),
            Plane::Xz => (1, 0, 2),
            Plane::Yz => (0, 1, 2),
        }
    }

    /// Unit normal along the positive fixed axis.
    #[inline]
    fn normal(self) -> Vec3 {
        match self {
            Plane::Xy => Vec3::Z,
            Plane::Xz => Vec3::Y,
            Plane::Yz => Vec3::X,
        }
    }
}

/// A rectangle lying in a coordinate plane at a fixed offset `k`.
///
/// The normal always points along the positive fixed axis; wrap the
/// rectangle in [`FlipNormals`](crate::FlipNormals) to face it the other way.
pub struct AxisRect {
    plane: Plane,
    a: Interval,
    b: Interval,
    k: f32,
    material: Arc<dyn Material>,
}

impl AxisRect {
    fn new(plane: Plane, a: Interval, b: Interval, k: f32, material: Arc<dyn Material>) -> Self {
        debug_assert!(a.min < a.max && b.min < b.max, "rectangle ranges must be non-empty");
        Self {
            plane,
            a,
            b,
            k,
            material,
        }
    }

    /// Rectangle `[x0, x1] x [y0, y1]` in the plane `z = k`.
    pub fn xy(x0: f32, x1: f32, y0: f32, y1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::Xy, Interval::new(x0, x1), Interval::new(y0, y1), k, material)
    }

    /// Rectangle `[x0, x1] x [z0, z1]` in the plane `y = k`.
    pub fn xz(x0: f32, x1: f32, z0: f32, z1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::Xz, Interval::new(x0, x1), Interval::new(z0, z1), k, material)
    }

    /// Rectangle `[y0, y1] x [z0, z1]` in the plane `x = k`.
    pub fn yz(y0: f32, y1: f32, z0: f32, z1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::Yz, Interval::new(y0, y1), Interval::new(z0, z1), k, material)
    }
}

impl Hittable for AxisRect {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let (axis, a_axis, b_axis) = self.plane.axes();
        let origin = ray.origin();
        let direction = ray.direction();

        // Parallel rays never cross the plane
        if direction[axis] == 0.0 {
            return None;
        }

        let t = (self.k - origin[axis]) / direction[axis];
        if !ray_t.surrounds(t) {
            return None;
        }

        let a = origin[a_axis] + t * direction[a_axis];
        let b = origin[b_axis] + t * direction[b_axis];
        if !self.a.surrounds(a) || !self.b.surrounds(b) {
            return None;
        }

        let mut p = ray.at(t);
        p[axis] = self.k;

        Some(HitRecord {
            p,
            normal: self.plane.normal(),
            material: self.material.as_ref(),
            u: (a - self.a.min) / self.a.size(),
            v: (b - self.b.min) / self.b.size(),
            t,
        })
    }
}
