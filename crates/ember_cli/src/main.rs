//! `ember` - render one of the built-in scenes to a PNG.

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod config;
mod scenes;

use cli::Args;
use config::{FileConfig, Settings};

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG, when set, refines the level chosen on the command line
    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    log::info!("Starting Ember");

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to configure the render thread pool")?;
    }
    log::debug!("Using {} render threads", rayon::current_num_threads());

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, file, args.scene.aspect_ratio())?;

    let (scene, camera) = args
        .scene
        .build(settings.width as f32 / settings.height as f32);

    let image = ember_renderer::render(
        &camera,
        &scene,
        settings.width,
        settings.height,
        &settings.render,
    );

    image
        .save_png(&args.output, settings.white)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
