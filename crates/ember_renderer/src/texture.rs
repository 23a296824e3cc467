//! Procedural and image textures.

use std::sync::Arc;

use crate::Color;
use ember_core::TextureImage;
use ember_math::Vec3;

/// Spatial frequency of the checker pattern.
pub const CHECKER_FREQUENCY: f32 = 10.0;

/// A color source sampled at surface coordinates `(u, v)` and point `p`.
#[derive(Debug, Clone)]
pub enum Texture {
    /// The same color everywhere.
    Constant(Color),
    /// 3D checker from the sign of `sin(f x) sin(f y) sin(f z)`.
    Checker {
        even: Box<Texture>,
        odd: Box<Texture>,
        frequency: f32,
    },
    /// Nearest-texel lookup into a decoded image.
    Image(Arc<TextureImage>),
}

impl Texture {
    /// A constant-color texture.
    pub fn solid(color: Color) -> Self {
        Texture::Constant(color)
    }

    /// A checker alternating between two textures.
    pub fn checker(even: impl Into<Texture>, odd: impl Into<Texture>) -> Self {
        Texture::Checker {
            even: Box::new(even.into()),
            odd: Box::new(odd.into()),
            frequency: CHECKER_FREQUENCY,
        }
    }

    /// An image texture.
    pub fn image(image: Arc<TextureImage>) -> Self {
        Texture::Image(image)
    }

    /// Sample the texture.
    pub fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        match self {
            Texture::Constant(color) => *color,
            Texture::Checker {
                even,
                odd,
                frequency,
            } => {
                let sines = (frequency * p.x).sin() * (frequency * p.y).sin() * (frequency * p.z).sin();
                if sines < 0.0 {
                    odd.value(u, v, p)
                } else {
                    even.value(u, v, p)
                }
            }
            Texture::Image(image) => image.texel_clamped(u, v),
        }
    }
}

impl From<Color> for Texture {
    fn from(color: Color) -> Self {
        Texture::Constant(color)
    }
}

impl From<Arc<TextureImage>> for Texture {
    fn from(image: Arc<TextureImage>) -> Self {
        Texture::Image(image)
    }
}
