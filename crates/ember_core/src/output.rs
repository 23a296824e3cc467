//! Display encoding and image file output.

use std::path::Path;

use ember_math::Vec3;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Got {actual} pixels for a {width}x{height} image")]
    DimensionMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// Convert a linear value to the sRGB transfer curve, clipped to [0, 1].
pub fn linear_to_srgb(linear: f32) -> f32 {
    let clipped = linear.clamp(0.0, 1.0);
    if linear > 0.0031308 {
        1.055 * clipped.powf(1.0 / 2.4) - 0.055
    } else {
        // Negative and NaN input land here and encode as black
        12.92 * clipped.max(0.0)
    }
}

/// Convert a linear value to an 8-bit sRGB channel.
#[inline]
pub fn linear_to_srgb8(linear: f32) -> u8 {
    (255.0 * linear_to_srgb(linear)).round().clamp(0.0, 255.0) as u8
}

/// Encode linear radiance as packed 8-bit sRGB triples.
///
/// Each pixel is divided by `white` before encoding.
pub fn encode_srgb8(pixels: &[Vec3], white: f32) -> Vec<u8> {
    let scale = if white > 0.0 { 1.0 / white } else { 1.0 };
    let mut bytes = Vec::with_capacity(pixels.len() * 3);
    for color in pixels {
        let c = *color * scale;
        bytes.extend_from_slice(&[
            linear_to_srgb8(c.x),
            linear_to_srgb8(c.y),
            linear_to_srgb8(c.z),
        ]);
    }
    bytes
}

/// Save linear radiance as an 8-bit sRGB PNG.
///
/// `pixels` are row-major with the top row first.
pub fn save_png(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    pixels: &[Vec3],
    white: f32,
) -> Result<(), OutputError> {
    if pixels.len() != width as usize * height as usize {
        return Err(OutputError::DimensionMismatch {
            width,
            height,
            actual: pixels.len(),
        });
    }

    let bytes = encode_srgb8(pixels, white);
    image::save_buffer(
        path.as_ref(),
        &bytes,
        width,
        height,
        image::ColorType::Rgb8,
    )?;

    log::debug!("Wrote {}x{} image to {}", width, height, path.as_ref().display());
    Ok(())
}
