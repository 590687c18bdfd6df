//! asp CLI - ray-cast occupancy renderer
//!
//! Loads a JSON scene document (camera + triangles) and renders which
//! detector pixels see the scene.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

mod document;

use document::{ImageOutput, SceneDocument};

#[derive(Parser)]
#[command(name = "asp")]
#[command(about = "Render binary occupancy images of triangle scenes", long_about = None)]
struct Cli {
    /// Log render progress (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene document
    Render {
        /// Path to the scene JSON file
        scene: PathBuf,
        /// Write the image as JSON instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Render nearest hit distance instead of occupancy
        #[arg(long)]
        depth: bool,
    },
    /// Display information about a scene document
    Info {
        /// Path to the scene JSON file
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Render {
            scene,
            output,
            depth,
        } => render(&scene, output.as_deref(), depth)?,
        Commands::Info { scene } => show_info(&scene)?,
    }

    Ok(())
}

fn render(path: &Path, output: Option<&Path>, depth: bool) -> Result<()> {
    let doc = SceneDocument::load(path)?;
    let (camera, scene) = doc
        .build()
        .with_context(|| format!("invalid scene in {}", path.display()))?;

    let json = if depth {
        let image = asp_raytrace::depth_snapshot(&camera, scene.triangles())?;
        match output {
            Some(_) => serde_json::to_string(&ImageOutput::from(&image))?,
            None => {
                for row in image.rows() {
                    let line: Vec<String> = row
                        .iter()
                        .map(|d| d.map_or_else(|| "-".to_string(), |t| format!("{t:.3}")))
                        .collect();
                    println!("{}", line.join(" "));
                }
                return Ok(());
            }
        }
    } else {
        let image = asp_raytrace::snapshot(&camera, scene.triangles())?;
        match output {
            Some(_) => serde_json::to_string(&ImageOutput::from(&image))?,
            None => {
                print!("{}", image.to_ascii());
                return Ok(());
            }
        }
    };

    if let Some(out) = output {
        std::fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
        info!("wrote image to {}", out.display());
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    let doc = SceneDocument::load(path)?;
    let (camera, scene) = doc
        .build()
        .with_context(|| format!("invalid scene in {}", path.display()))?;

    let position = camera.orientation().position().xyz();
    let direction = camera.orientation().direction();
    let [nx, ny] = camera.array_size();
    let [px, py] = camera.pixel_size();
    let [w, h] = camera.detector_size();

    println!("File: {}", path.display());
    println!();
    println!("Camera:");
    println!(
        "  position:     ({}, {}, {})",
        position.x, position.y, position.z
    );
    println!(
        "  direction:    ({}, {}, {})",
        direction.x, direction.y, direction.z
    );
    println!("  focal length: {}", camera.focal_length());
    println!("  array size:   {nx} x {ny} pixels");
    println!("  pixel size:   {px} x {py}");
    println!("  detector:     {w} x {h}");
    println!();
    println!("Triangles: {}", scene.len());
    let degenerate = scene.degenerate_count();
    if degenerate > 0 {
        println!("  degenerate: {degenerate}");
    }

    Ok(())
}
