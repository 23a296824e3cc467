use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in demo scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneChoice {
    /// Glass, metal and diffuse spheres on a large ground sphere
    Spheres,
    /// Cornell box with a ceiling light and two rotated boxes
    Cornell,
    /// Checker-textured ground sphere under the sky
    Checker,
}

#[derive(Debug, Parser)]
#[command(name = "ember")]
#[command(about = "A recursive CPU ray tracer")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "spheres")]
    pub scene: SceneChoice,

    /// Image width in pixels
    #[arg(long, alias = "nx")]
    pub width: Option<u32>,

    /// Image height in pixels (defaults to width / scene aspect ratio)
    #[arg(long, alias = "ny")]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum number of bounces
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// White point; radiance is divided by this before sRGB encoding
    #[arg(long)]
    pub white: Option<f32>,

    /// Output PNG path
    #[arg(short, long, alias = "outFile", default_value = "output.png")]
    pub output: PathBuf,

    /// JSON render settings; explicit flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Worker threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}
