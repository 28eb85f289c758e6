//! glint - render a scene to an image file.
//!
//! Renders the built-in scene (or a JSON scene description) one or more
//! times, logging how long each pass takes, and writes the last pass.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{default_scene, load_scene, Scene};
use glint_renderer::{save_image, ImageBuffer};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let scene = load(&args)?;
    let config = args.render_config();

    log::info!(
        "Rendering {}x{} ({} pass{}, {})",
        args.width,
        args.height,
        args.passes,
        if args.passes == 1 { "" } else { "es" },
        if config.parallel { "parallel" } else { "sequential" }
    );

    let mut image = None;
    for pass in 1..=args.passes {
        let start = Instant::now();
        let rendered = ImageBuffer::render(&scene, args.width, args.height, &config)
            .with_context(|| format!("render pass {pass} failed"))?;
        log::info!("Pass {}/{} rendered in {:?}", pass, args.passes, start.elapsed());
        image = Some(rendered);
    }

    // passes >= 1 is enforced by the argument parser
    let image = image.context("no render passes were run")?;
    save_image(&image, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}

fn load(args: &Args) -> Result<Scene> {
    match &args.scene {
        Some(path) => {
            load_scene(path).with_context(|| format!("failed to load scene {}", path.display()))
        }
        None => {
            log::debug!("Using built-in scene");
            Ok(default_scene())
        }
    }
}
