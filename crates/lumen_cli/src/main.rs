// Render a scene to a PNG.
// Run with: cargo run --release --bin lumen -- <scene.json> <config.json> <camera.json> <output.png>

use std::env;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::LevelFilter;
use lumen_core::{Camera, Config, SceneFile};
use lumen_renderer::{render, Scene};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!(
            "Usage: {} <scene.json> <config.json> <camera.json> <output.png>",
            args[0]
        );
        std::process::exit(1);
    }

    let scene_path = Path::new(&args[1]);
    let scene_file =
        SceneFile::load(scene_path).with_context(|| format!("loading scene {}", args[1]))?;
    let config = Config::load(&args[2]).with_context(|| format!("loading config {}", args[2]))?;
    let camera = Camera::load(&args[3]).with_context(|| format!("loading camera {}", args[3]))?;

    // Mesh paths in the scene file resolve relative to the scene file itself
    let base_dir = scene_path.parent().unwrap_or_else(|| Path::new("."));
    let scene = Scene::from_file(&scene_file, base_dir).context("building scene")?;

    log::info!(
        "Rendering {}x{} at {} samples/pixel, {} max bounces",
        config.width,
        config.height,
        config.antialias_samples,
        config.max_bounces
    );

    let start = Instant::now();
    let frame = render(&scene, &camera, &config);
    log::info!("Rendered in {:.2?}", start.elapsed());

    frame
        .save_png(&args[4])
        .with_context(|| format!("writing {}", args[4]))?;
    log::info!("Wrote {}", args[4]);

    Ok(())
}
