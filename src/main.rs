use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};

use glint::bmp::save_bmp;
use glint::config::{load_scene, validate_settings, SceneConfig};
use glint::render::render_picture;

use crate::cli::Args;

mod cli;

fn init_logger(level: LevelFilter) {
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    let SceneConfig { scene, camera, mut settings } = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => SceneConfig::default(),
    };

    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(aa_depth) = args.aa_depth {
        settings.aa_depth = aa_depth;
    }
    if let Some(max_depth) = args.max_depth {
        settings.shading.max_depth = max_depth;
    }
    validate_settings(&settings).context("command line overrides")?;

    info!(target: "app", "Rendering {}x{}, {} samples per pixel", settings.width, settings.height, settings.aa_depth * settings.aa_depth);
    let picture = render_picture(&scene, &camera, &settings);

    save_bmp(&picture, settings.dpi, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(target: "app", "Saved {}", args.output.display());

    Ok(())
}
