//! Ember renderer - CPU recursive ray tracing.
//!
//! A brute-force Monte Carlo ray tracer over spheres, axis-aligned
//! rectangles, boxes and their instances, with diffuse, metal, glass and
//! emissive materials.

mod box_shape;
mod bucket;
mod camera;
mod hittable;
mod instance;
mod material;
mod rect;
mod renderer;
mod sampling;
mod scene;
mod sphere;
mod texture;

pub use box_shape::BoxShape;
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use instance::{FlipNormals, RotateY, Translate};
pub use material::{
    reflect, refract, Color, Dielectric, DiffuseLight, Lambertian, Material, Metal, ScatterResult,
};
pub use rect::AxisRect;
pub use renderer::{ray_color, render, render_pixel, ImageBuffer, RenderConfig};
pub use sampling::{gen_f32, pixel_seed, random_in_unit_disk, random_in_unit_sphere};
pub use scene::{Scene, DEFAULT_BACKGROUND};
pub use sphere::Sphere;
pub use texture::{Texture, CHECKER_FREQUENCY};

/// Re-export common math types from ember_math
pub use ember_math::{Interval, Ray, Vec2, Vec3};
