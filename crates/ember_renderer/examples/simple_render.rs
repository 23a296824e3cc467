//! Simple ray tracer example.
//!
//! Renders a few spheres over a checkered ground and saves a PNG.

use std::sync::Arc;

use ember_renderer::{
    render, Camera, Color, Dielectric, Lambertian, Material, Metal, RenderConfig, Scene, Sphere,
    Texture, Vec3,
};

fn main() {
    println!("Ember Ray Tracer - Simple Example");
    println!("=================================");

    let (width, height) = (400, 225);

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?} ({} primitives)", start.elapsed(), scene.len());

    let look_from = Vec3::new(3.0, 1.2, 5.0);
    let look_at = Vec3::new(-0.5, 0.0, 0.0);
    let camera = Camera::new()
        .with_position(look_from, look_at, Vec3::Y)
        .with_lens(24.0, 0.1)
        .with_aspect_ratio(width as f32 / height as f32);

    let config = RenderConfig {
        samples_per_pixel: 32,
        max_depth: 8,
        ..RenderConfig::default()
    };

    println!("Rendering {}x{} @ {} spp...", width, height, config.samples_per_pixel);

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, width, height, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.png";
    image.save_png(filename, 1.0).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Texture::checker(
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    )));
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    let gold: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2)).with_fuzz(0.1));
    let blue: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));

    Scene::new(Color::new(0.5, 0.7, 1.0))
        .with(Box::new(Sphere::new(Vec3::new(0.0, -1000.5, 0.0), 1000.0, ground)))
        .with(Box::new(Sphere::new(Vec3::new(-0.9, 0.0, 1.0), 0.5, glass)))
        .with(Box::new(Sphere::new(Vec3::new(-0.5, 0.0, 0.0), 0.5, gold)))
        .with(Box::new(Sphere::new(Vec3::new(0.7, 0.0, 0.0), 0.5, blue)))
}
