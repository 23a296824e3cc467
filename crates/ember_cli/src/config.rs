//! Render settings from a JSON file merged with command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use ember_renderer::RenderConfig;
use serde::Deserialize;

use crate::cli::Args;

/// Default image width, matching the classic `--nx` default.
pub const DEFAULT_WIDTH: u32 = 720;

/// Contents of a `--config` file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    #[serde(flatten)]
    pub render: RenderConfig,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub white: Option<f32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Fully resolved settings for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub white: f32,
    pub render: RenderConfig,
}

impl Settings {
    /// Merge flags over the file config. A missing height follows the
    /// scene's aspect ratio.
    pub fn resolve(args: &Args, file: FileConfig, aspect_ratio: f32) -> Result<Self> {
        let mut render = file.render;
        if let Some(samples) = args.samples {
            render.samples_per_pixel = samples;
        }
        if let Some(max_depth) = args.max_depth {
            render.max_depth = max_depth;
        }
        if let Some(seed) = args.seed {
            render.seed = seed;
        }

        let width = args.width.or(file.width).unwrap_or(DEFAULT_WIDTH);
        let height = args
            .height
            .or(file.height)
            .unwrap_or_else(|| ((width as f32 / aspect_ratio).round() as u32).max(1));
        let white = args.white.or(file.white).unwrap_or(1.0);

        ensure!(width > 0 && height > 0, "image size must be positive, got {}x{}", width, height);
        ensure!(white > 0.0, "white point must be positive, got {}", white);
        if render.samples_per_pixel == 0 {
            log::warn!("samples_per_pixel is 0, using 1");
            render.samples_per_pixel = 1;
        }

        Ok(Self {
            width,
            height,
            white,
            render,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(flags: &[&str]) -> Args {
        let mut argv = vec!["ember"];
        argv.extend_from_slice(flags);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::resolve(&args(&[]), FileConfig::default(), 16.0 / 9.0).unwrap();

        assert_eq!(settings.width, 720);
        assert_eq!(settings.height, 405);
        assert_eq!(settings.white, 1.0);
        assert_eq!(settings.render, RenderConfig::default());
    }

    #[test]
    fn test_file_values_are_used() {
        let file = FileConfig::parse(
            r#"{ "width": 64, "height": 32, "white": 2.0, "samples_per_pixel": 9, "seed": 5 }"#,
        )
        .unwrap();
        let settings = Settings::resolve(&args(&[]), file, 1.0).unwrap();

        assert_eq!((settings.width, settings.height), (64, 32));
        assert_eq!(settings.white, 2.0);
        assert_eq!(settings.render.samples_per_pixel, 9);
        assert_eq!(settings.render.seed, 5);
        assert_eq!(settings.render.max_depth, RenderConfig::default().max_depth);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig::parse(r#"{ "width": 64, "samples_per_pixel": 9, "max_depth": 2 }"#).unwrap();
        let settings =
            Settings::resolve(&args(&["--width", "100", "--samples", "4"]), file, 2.0).unwrap();

        assert_eq!(settings.width, 100);
        assert_eq!(settings.height, 50);
        assert_eq!(settings.render.samples_per_pixel, 4);
        assert_eq!(settings.render.max_depth, 2);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Settings::resolve(&args(&["--width", "0"]), FileConfig::default(), 1.0).is_err());
        assert!(Settings::resolve(&args(&["--white", "0"]), FileConfig::default(), 1.0).is_err());
        assert!(FileConfig::parse("{ \"width\": -3 }").is_err());
    }

    #[test]
    fn test_zero_samples_clamped() {
        let settings = Settings::resolve(&args(&["--samples", "0"]), FileConfig::default(), 1.0).unwrap();
        assert_eq!(settings.render.samples_per_pixel, 1);
    }
}
