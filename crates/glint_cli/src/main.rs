mod cli;
mod logger;
mod scenes;

use anyhow::{bail, Result};
use clap::Parser;
use cli::Args;
use glint_renderer::{render, PixelBuffer, RenderConfig};
use scenes::SceneAssets;
use std::fs;
use std::path::Path;

/// Read a JSON render config. Missing fields take their defaults.
fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    log::debug!("Loaded render config from {}", path.display());
    Ok(config)
}

/// Apply command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut RenderConfig, args: &Args) {
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(depth) = args.max_depth {
        config.max_reflection_depth = depth;
    }
    if let Some(threads) = args.threads {
        config.threads = Some(threads);
    }
}

fn save_png(buffer: PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = (buffer.width(), buffer.height());
    let Some(image) = image::RgbaImage::from_raw(width, height, buffer.into_bytes()) else {
        bail!("pixel buffer does not match a {}x{} image", width, height);
    };

    image.save(path)?;
    log::info!("Image saved as {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    log::info!("Starting Glint");

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };
    apply_overrides(&mut config, &args);

    let assets = SceneAssets {
        texture: args.texture.as_deref(),
        mesh: args.mesh.as_deref(),
    };
    let scene = scenes::build(args.scene, config.aspect_ratio(), assets)?;

    let buffer = render(&scene, &config)?;
    save_png(buffer, &args.output)?;

    Ok(())
}
