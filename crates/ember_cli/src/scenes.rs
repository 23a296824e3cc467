//! Built-in demo scenes.

use std::sync::Arc;

use ember_math::Vec3;
use ember_renderer::{
    AxisRect, BoxShape, Camera, Color, Dielectric, DiffuseLight, FlipNormals, Lambertian, Material,
    Metal, RotateY, Scene, Sphere, Texture, Translate, DEFAULT_BACKGROUND,
};

use crate::cli::SceneChoice;

impl SceneChoice {
    /// Aspect ratio the scene is framed for.
    pub fn aspect_ratio(self) -> f32 {
        match self {
            SceneChoice::Spheres | SceneChoice::Checker => 16.0 / 9.0,
            SceneChoice::Cornell => 1.0,
        }
    }

    /// Build the scene and its camera for an image of the given aspect ratio.
    pub fn build(self, aspect_ratio: f32) -> (Scene, Camera) {
        let (scene, camera) = match self {
            SceneChoice::Spheres => spheres(),
            SceneChoice::Cornell => cornell_box(),
            SceneChoice::Checker => checker(),
        };
        log::info!("Built {:?} scene with {} primitives", self, scene.len());
        (scene, camera.with_aspect_ratio(aspect_ratio))
    }
}

fn spheres() -> (Scene, Camera) {
    let transparent: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    let tan: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.6, 0.6, 0.2)));
    let blue: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.2, 0.2, 0.5)));
    let gray: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.2, 0.2, 0.2)));

    let scene = Scene::new(DEFAULT_BACKGROUND)
        .with(Box::new(Sphere::new(Vec3::new(-0.9, 0.0, 1.0), 0.5, transparent)))
        .with(Box::new(Sphere::new(Vec3::new(-0.5, 0.0, 0.0), 0.5, tan)))
        .with(Box::new(Sphere::new(Vec3::new(0.7, 0.0, 0.0), 0.5, blue)))
        .with(Box::new(Sphere::new(Vec3::new(0.0, -40.0, 0.0), 39.5, gray)));

    let camera = Camera::new()
        .with_position(Vec3::new(3.0, 1.2, 5.0), Vec3::new(-0.5, 0.0, 0.0), Vec3::Y)
        .with_lens(24.0, 0.5);

    (scene, camera)
}

fn cornell_box() -> (Scene, Camera) {
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.65, 0.05, 0.05)));
    let white: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.73, 0.73, 0.73)));
    let green: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.12, 0.45, 0.15)));
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::new(Color::new(15.0, 15.0, 15.0)));

    let mut scene = Scene::new(Color::ZERO);

    // Walls, flipped where the plane's normal would face away from the room
    scene.add(Box::new(FlipNormals::new(Box::new(AxisRect::yz(
        0.0, 555.0, 0.0, 555.0, 555.0, green,
    )))));
    scene.add(Box::new(AxisRect::yz(0.0, 555.0, 0.0, 555.0, 0.0, red)));
    scene.add(Box::new(AxisRect::xz(213.0, 343.0, 227.0, 332.0, 554.0, light)));
    scene.add(Box::new(FlipNormals::new(Box::new(AxisRect::xz(
        0.0,
        555.0,
        0.0,
        555.0,
        555.0,
        white.clone(),
    )))));
    scene.add(Box::new(AxisRect::xz(0.0, 555.0, 0.0, 555.0, 0.0, white.clone())));
    scene.add(Box::new(FlipNormals::new(Box::new(AxisRect::xy(
        0.0,
        555.0,
        0.0,
        555.0,
        555.0,
        white.clone(),
    )))));

    let short_box = BoxShape::new(Vec3::ZERO, Vec3::splat(165.0), white.clone());
    scene.add(Box::new(Translate::new(
        Box::new(RotateY::new(Box::new(short_box), -18.0)),
        Vec3::new(130.0, 0.0, 65.0),
    )));

    let tall_box = BoxShape::new(Vec3::ZERO, Vec3::new(165.0, 330.0, 165.0), white);
    scene.add(Box::new(Translate::new(
        Box::new(RotateY::new(Box::new(tall_box), 15.0)),
        Vec3::new(265.0, 0.0, 295.0),
    )));

    let camera = Camera::new()
        .with_position(
            Vec3::new(278.0, 278.0, -800.0),
            Vec3::new(278.0, 278.0, 0.0),
            Vec3::Y,
        )
        .with_lens(40.0, 0.0);

    (scene, camera)
}

fn checker() -> (Scene, Camera) {
    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Texture::checker(
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    )));
    let mirror: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8)).with_fuzz(0.05));

    let scene = Scene::new(Color::new(0.5, 0.7, 1.0))
        .with(Box::new(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground)))
        .with(Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, mirror)));

    let camera = Camera::new()
        .with_position(Vec3::new(6.0, 2.0, 6.0), Vec3::new(0.0, 0.8, 0.0), Vec3::Y)
        .with_lens(30.0, 0.0);

    (scene, camera)
}
