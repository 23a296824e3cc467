//! Core recursive ray tracer.
//!
//! Implements brute-force light transport with:
//! - Recursive scattering bounded by a maximum depth
//! - Emission from light materials and a constant background
//! - Per-pixel jittered sampling with a deterministic generator per pixel

use std::path::Path;
use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::sampling::gen_f32;
use crate::{Camera, Color, Scene};
use ember_core::OutputError;
use ember_math::{Ray, Vec2};
use rand::RngCore;
use rayon::prelude::*;
use serde::Deserialize;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Primary rays averaged per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of scattering events along a path
    pub max_depth: u32,
    /// Seed mixed into every pixel's generator
    pub seed: u64,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 3,
            max_depth: 4,
            seed: 0,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Compute the radiance carried back along a ray.
///
/// `depth` counts the scattering events so far; once it reaches
/// `config.max_depth` the path stops and only the emission of the last
/// surface is returned.
pub fn ray_color(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = scene.intersect(ray, ray.interval()) else {
        return scene.background();
    };

    // Get emission from material (for lights)
    let emission = rec.material.emitted(rec.u, rec.v, rec.p);

    if depth >= config.max_depth {
        return emission;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            let scattered_color = ray_color(&result.scattered, scene, depth + 1, config, rng);
            emission + result.attenuation * scattered_color
        }
        // Absorbed, or a light
        None => emission,
    }
}

/// Render a single pixel with multi-sampling.
///
/// Pixel `(0, 0)` is the top-left of the image. `(x, y)` must lie inside
/// `size`.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    size: (u32, u32),
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let (width, height) = size;
    debug_assert!(
        x < width && y < height,
        "pixel ({}, {}) outside {}x{} image",
        x,
        y,
        width,
        height
    );
    let samples = config.samples_per_pixel.max(1);
    // Image rows run top-down, camera coordinates bottom-up
    let row = height.saturating_sub(1).saturating_sub(y) as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let image_point = Vec2::new(
            (x as f32 + gen_f32(rng)) / width as f32,
            (row + gen_f32(rng)) / height as f32,
        );
        let ray = camera.generate_ray(image_point, rng);
        pixel_color += ray_color(&ray, scene, 0, config, rng);
    }

    // Average the samples
    pixel_color / samples as f32
}

/// Linear-radiance image, row-major with the top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into the image.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Save as an 8-bit sRGB PNG.
    pub fn save_png(&self, path: impl AsRef<Path>, white: f32) -> Result<(), OutputError> {
        ember_core::save_png(path, self.width, self.height, &self.pixels, white)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are traced in parallel on the current rayon pool. The result
/// depends only on the inputs, not on the thread count.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);
    if width == 0 || height == 0 {
        log::warn!("Nothing to render for a {}x{} image", width, height);
        return image;
    }

    let buckets = generate_buckets(width, height, config.bucket_size);
    log::info!(
        "Rendering {}x{} @ {} spp, depth {} ({} buckets, {} primitives)",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth,
        buckets.len(),
        scene.len()
    );

    let start = Instant::now();
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, scene, (width, height), config);
            log::debug!("Bucket {} done ({} pixels)", bucket.index, bucket.pixel_count());
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AxisRect, BoxShape, Dielectric, DiffuseLight, FlipNormals, Lambertian, Material, Metal, Sphere};
    use ember_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn closed_room(light: bool) -> Scene {
        let white: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.73, 0.73, 0.73)));
        let mut scene = Scene::new(Color::ZERO);

        // Inside of a box, faces turned inward
        for face in [
            AxisRect::xy(-2.0, 2.0, -2.0, 2.0, 2.0, white.clone()),
            AxisRect::xz(-2.0, 2.0, -2.0, 2.0, 2.0, white.clone()),
            AxisRect::yz(-2.0, 2.0, -2.0, 2.0, 2.0, white.clone()),
        ] {
            scene.add(Box::new(FlipNormals::new(Box::new(face))));
        }
        scene.add(Box::new(AxisRect::xy(-2.0, 2.0, -2.0, 2.0, -2.0, white.clone())));
        scene.add(Box::new(AxisRect::xz(-2.0, 2.0, -2.0, 2.0, -2.0, white.clone())));
        scene.add(Box::new(AxisRect::yz(-2.0, 2.0, -2.0, 2.0, -2.0, white.clone())));

        scene.add(Box::new(Sphere::new(Vec3::new(0.5, -1.0, 0.0), 0.6, Arc::new(Dielectric::new(1.5)))));
        scene.add(Box::new(Sphere::new(
            Vec3::new(-0.8, -1.2, 0.5),
            0.5,
            Arc::new(Metal::new(Color::new(0.9, 0.8, 0.7))),
        )));
        scene.add(Box::new(BoxShape::new(
            Vec3::new(0.5, -2.0, -1.5),
            Vec3::new(1.5, -0.5, -0.5),
            white,
        )));

        if light {
            scene.add(Box::new(AxisRect::xz(
                -0.5,
                0.5,
                -0.5,
                0.5,
                1.99,
                Arc::new(DiffuseLight::new(Color::new(15.0, 15.0, 15.0))),
            )));
        }
        scene
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::new(Color::new(0.1, 0.2, 0.3));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rng = StdRng::seed_from_u64(42);

        let color = ray_color(&ray, &scene, 0, &RenderConfig::default(), &mut rng);
        assert_eq!(color, Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_light_seen_directly() {
        let scene = Scene::new(Color::ZERO).with(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(DiffuseLight::new(Color::new(2.0, 3.0, 4.0))),
        )));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let mut rng = StdRng::seed_from_u64(42);

        let color = ray_color(&ray, &scene, 0, &RenderConfig::default(), &mut rng);
        assert_eq!(color, Color::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_depth_limit_truncates_path() {
        // A mirror in front of a bright background
        let scene = Scene::new(Color::ONE).with(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(Metal::new(Color::new(0.5, 0.5, 0.5))),
        )));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let mut rng = StdRng::seed_from_u64(42);

        let no_bounce = RenderConfig {
            max_depth: 0,
            ..RenderConfig::default()
        };
        assert_eq!(ray_color(&ray, &scene, 0, &no_bounce, &mut rng), Color::ZERO);

        // One bounce reflects straight back into the background
        let one_bounce = RenderConfig {
            max_depth: 1,
            ..RenderConfig::default()
        };
        let color = ray_color(&ray, &scene, 0, &one_bounce, &mut rng);
        assert!((color - Color::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn test_emission_plus_attenuated_bounce() {
        // Glass is neutral, so the light behind it shows through unchanged
        let scene = Scene::new(Color::ZERO)
            .with(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, Arc::new(Dielectric::new(1.5)))))
            .with(Box::new(AxisRect::xy(
                -10.0,
                10.0,
                -10.0,
                10.0,
                -8.0,
                Arc::new(DiffuseLight::new(Color::new(1.0, 2.0, 3.0))),
            )));
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let mut rng = StdRng::seed_from_u64(42);
        let config = RenderConfig {
            max_depth: 4,
            ..RenderConfig::default()
        };

        let color = ray_color(&ray, &scene, 0, &config, &mut rng);
        assert!((color - Color::new(1.0, 2.0, 3.0)).length() < 1e-4);
    }

    #[test]
    fn test_radiance_is_finite_and_non_negative() {
        for light in [false, true] {
            let scene = closed_room(light);
            let config = RenderConfig {
                max_depth: 12,
                ..RenderConfig::default()
            };
            let mut rng = StdRng::seed_from_u64(9);

            for i in 0..200 {
                let angle = i as f32 * 0.37;
                let direction = Vec3::new(angle.cos(), (angle * 0.5).sin(), angle.sin());
                let ray = Ray::new(Vec3::new(0.0, 0.5, 1.0), direction);
                let color = ray_color(&ray, &scene, 0, &config, &mut rng);

                assert!(color.is_finite(), "non-finite radiance {:?}", color);
                assert!(color.min_element() >= 0.0, "negative radiance {:?}", color);
                if !light {
                    // Closed room, black background, no emitters
                    assert_eq!(color, Color::ZERO);
                }
            }
        }
    }

    #[test]
    fn test_render_pixel_averages_samples() {
        let scene = Scene::new(Color::new(0.25, 0.5, 0.75));
        let camera = Camera::new();
        let config = RenderConfig {
            samples_per_pixel: 8,
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&camera, &scene, 3, 4, (10, 10), &config, &mut rng);
        assert!((color - Color::new(0.25, 0.5, 0.75)).length() < 1e-6);
    }

    #[test]
    fn test_render_pixel_hits_sphere() {
        let scene = Scene::new(Color::new(0.5, 0.7, 1.0)).with(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )));
        let camera = Camera::new();
        let config = RenderConfig {
            samples_per_pixel: 4,
            max_depth: 5,
            ..RenderConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        // Center pixel looks straight at the sphere, which darkens the sky
        let color = render_pixel(&camera, &scene, 5, 5, (10, 10), &config, &mut rng);
        assert!(color.length() > 0.0);
        assert!(color.x < 0.5);
    }

    #[test]
    fn test_render_is_deterministic() {
        let scene = closed_room(true);
        let camera = Camera::new()
            .with_position(Vec3::new(0.0, 0.0, 1.9), Vec3::new(0.0, 0.0, 0.0), Vec3::Y)
            .with_lens(60.0, 0.0);
        let config = RenderConfig {
            samples_per_pixel: 4,
            max_depth: 3,
            seed: 11,
            bucket_size: 5,
        };

        let a = render(&camera, &scene, 12, 9, &config);
        let b = render(&camera, &scene, 12, 9, &config);

        assert_eq!(a.width, 12);
        assert_eq!(a.height, 9);
        assert_eq!(a.pixels.len(), 12 * 9);
        assert_eq!(a.pixels, b.pixels);
        assert!(a.pixels.iter().any(|c| c.length() > 0.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 10x10 image")]
    fn test_render_pixel_rejects_out_of_range_row() {
        let mut rng = StdRng::seed_from_u64(42);
        render_pixel(
            &Camera::new(),
            &Scene::default(),
            0,
            10,
            (10, 10),
            &RenderConfig::default(),
            &mut rng,
        );
    }

    #[test]
    fn test_render_empty_image() {
        let image = render(&Camera::new(), &Scene::default(), 0, 4, &RenderConfig::default());
        assert!(image.pixels.is_empty());
    }

    #[test]
    fn test_config_from_json_uses_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{ "max_depth": 8 }"#).unwrap();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.seed, 0);
        assert_eq!(config.samples_per_pixel, RenderConfig::default().samples_per_pixel);
    }
}
