//! Texture image loading and lookup.
//!
//! Image files are decoded once into a linear RGB buffer that the renderer's
//! image texture samples with nearest-texel, clamped lookups.

use std::path::Path;

use ember_math::Vec3;
use thiserror::Error;

/// Errors that can occur during texture loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture has {actual} pixels, expected {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A decoded texture image.
///
/// Stores pixels in linear RGB float format, row-major, top row first.
#[derive(Clone, Debug)]
pub struct TextureImage {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl TextureImage {
    /// Create a texture image from linear pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Vec3>) -> TextureResult<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(TextureError::DimensionMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Look up the texel under surface coordinates `(u, v)`.
    ///
    /// Coordinates are clamped to the image, `v = 1` is the top row.
    /// An empty image reads as black.
    pub fn texel_clamped(&self, u: f32, v: f32) -> Vec3 {
        if self.pixels.is_empty() {
            return Vec3::ZERO;
        }

        let max_x = self.width as i64 - 1;
        let max_y = self.height as i64 - 1;

        // `as` saturates, and maps NaN to 0
        let x = ((u * self.width as f32) as i64).clamp(0, max_x);
        let y = (((1.0 - v) * self.height as f32) as i64).clamp(0, max_y);

        self.pixels[(y * self.width as i64 + x) as usize]
    }
}

/// Load a texture image from a file path.
pub fn load_texture_image(path: impl AsRef<Path>) -> TextureResult<TextureImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| TextureError::Load {
        path: path.display().to_string(),
        source,
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let pixels: Vec<Vec3> = rgb
        .pixels()
        .map(|p| {
            Vec3::new(
                srgb_to_linear(p[0]),
                srgb_to_linear(p[1]),
                srgb_to_linear(p[2]),
            )
        })
        .collect();

    log::debug!("Loaded texture: {} ({}x{})", path.display(), width, height);

    TextureImage::new(width, height, pixels)
}

/// Convert sRGB byte value to linear float.
pub fn srgb_to_linear(value: u8) -> f32 {
    let v = value as f32 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
