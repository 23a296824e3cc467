//! Material trait for surface scattering.

use crate::{hittable::HitRecord, sampling::random_in_unit_sphere, Texture};
use ember_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB radiance or reflectance)
pub type Color = Vec3;

/// Outcome of a scattering event.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Fraction of the incoming radiance kept, per channel
    pub attenuation: Color,
    /// The outgoing ray, leaving the hit point
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed or the material only emits.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;

    /// Get emitted light from this material.
    ///
    /// Most materials return black (no emission).
    fn emitted(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        Color::ZERO
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Texture,
}

impl Lambertian {
    /// Create a new Lambertian material from a color or texture.
    pub fn new(albedo: impl Into<Texture>) -> Self {
        Self {
            albedo: albedo.into(),
        }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        // Cosine-weighted direction around the normal
        let scatter_direction = (rec.normal + random_in_unit_sphere(rng))
            .try_normalize()
            .unwrap_or(rec.normal);

        Some(ScatterResult {
            attenuation: self.albedo.value(rec.u, rec.v, rec.p),
            scattered: Ray::spawn(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Texture,
    fuzz: f32,
}

impl Metal {
    /// Create a perfect mirror.
    pub fn new(albedo: impl Into<Texture>) -> Self {
        Self {
            albedo: albedo.into(),
            fuzz: 0.0,
        }
    }

    /// Set the roughness: 0.0 = perfect mirror, 1.0 = very rough.
    pub fn with_fuzz(mut self, fuzz: f32) -> Self {
        self.fuzz = fuzz.clamp(0.0, 1.0);
        self
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let unit_direction = ray_in.direction().try_normalize()?;
        let mut direction = reflect(unit_direction, rec.normal);
        if self.fuzz > 0.0 {
            direction = (direction + self.fuzz * random_in_unit_sphere(rng)).try_normalize()?;
        }

        // A reflection that does not leave the surface is absorbed
        if direction.dot(rec.normal) <= 0.0 {
            return None;
        }

        Some(ScatterResult {
            attenuation: self.albedo.value(0.0, 0.0, rec.p),
            scattered: Ray::spawn(rec.p, direction),
        })
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        debug_assert!(ior > 0.0, "index of refraction must be positive");
        Self { ior }
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let unit_direction = ray_in.direction().try_normalize()?;

        // Normals are outward, so a positive dot product means the ray is leaving
        let (outward_normal, ni_over_nt) = if unit_direction.dot(rec.normal) > 0.0 {
            (-rec.normal, self.ior)
        } else {
            (rec.normal, 1.0 / self.ior)
        };

        // Total internal reflection falls back to the mirror direction
        let direction = refract(unit_direction, outward_normal, ni_over_nt)
            .unwrap_or_else(|| reflect(unit_direction, rec.normal));

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::spawn(rec.p, direction),
        })
    }
}

/// Diffuse light emitter.
#[derive(Debug, Clone)]
pub struct DiffuseLight {
    emit: Texture,
}

impl DiffuseLight {
    /// Create a new diffuse light from an emission color or texture.
    pub fn new(emit: impl Into<Texture>) -> Self {
        Self { emit: emit.into() }
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _ray_in: &Ray, _rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterResult> {
        None
    }

    fn emitted(&self, u: f32, v: f32, p: Vec3) -> Color {
        self.emit.value(u, v, p)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n`.
///
/// `n` must face the incoming side. Returns `None` on total internal
/// reflection.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}
