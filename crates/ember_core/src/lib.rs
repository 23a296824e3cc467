//! Ember Core - image input and output for the renderer.
//!
//! This crate provides:
//!
//! - **Texture images**: decoding image files into linear RGB buffers with
//!   clamped texel lookup
//! - **Output encoding**: linear radiance to 8-bit sRGB and PNG files
//!
//! # Example
//!
//! ```ignore
//! use ember_core::{load_texture_image, save_png};
//!
//! let earth = load_texture_image("earth.jpg")?;
//! let texel = earth.texel_clamped(0.25, 0.5);
//! save_png("out.png", width, height, &pixels, 1.0)?;
//! ```

pub mod output;
pub mod texture;

// Re-export commonly used types
pub use output::{encode_srgb8, linear_to_srgb, linear_to_srgb8, save_png, OutputError};
pub use texture::{load_texture_image, srgb_to_linear, TextureError, TextureImage};
