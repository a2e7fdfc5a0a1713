use std::error::Error;
use std::fs;

use clap::Parser;

mod compositor;
mod config;
mod export;
mod grid;
mod island;
mod mesh;
mod noise_field;
mod shape;
mod util;

use config::IslandConfig;
use shape::ShapeVariant;

#[derive(Parser, Debug)]
#[command(name = "island_generator")]
#[command(about = "Generate procedural island heightmaps and meshes")]
struct Args {
    /// Grid resolution per axis (vertices)
    #[arg(short, long)]
    resolution: Option<usize>,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Island silhouette: circle, donut, crescent, archipelago,
    /// noise_warped, or irregular. Unrecognized names fall back to circle.
    #[arg(long)]
    shape: Option<String>,

    /// Noise scale (zoom; higher = larger features)
    #[arg(long)]
    scale: Option<f32>,

    /// Number of noise octaves
    #[arg(long)]
    octaves: Option<u32>,

    /// Peak sharpness exponent (higher = pointier mountains)
    #[arg(long)]
    peak_sharpness: Option<f32>,

    /// Water level in normalized height units
    #[arg(long)]
    water_level: Option<f32>,

    /// Load a full JSON config; CLI flags override its fields
    #[arg(short, long)]
    config: Option<String>,

    /// Output path prefix for the PNG previews
    #[arg(short, long, default_value = "island")]
    output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => serde_json::from_str::<IslandConfig>(&fs::read_to_string(path)?)?,
        None => IslandConfig::default(),
    };

    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    if let Some(tag) = &args.shape {
        config.shape = ShapeVariant::from_tag(tag);
    }
    if let Some(scale) = args.scale {
        config.noise.scale = scale;
    }
    if let Some(octaves) = args.octaves {
        config.noise.octaves = octaves;
    }
    if let Some(sharpness) = args.peak_sharpness {
        config.height.peak_sharpness = sharpness;
    }
    if let Some(water) = args.water_level {
        config.shore.water_level = water;
    }

    let seed = args.seed.unwrap_or_else(rand::random);

    println!("Generating island with seed: {}", seed);
    println!(
        "Resolution: {}x{}, shape: {}",
        config.resolution,
        config.resolution,
        config.shape.tag()
    );

    let island = island::generate(&config, seed)?;

    let (min_h, max_h) = island.height.min_max();
    let land = island.land_fraction(config.shore.water_level);
    println!(
        "Height range: {:.3} to {:.3} ({:.1}% above water level)",
        min_h,
        max_h,
        land * 100.0
    );
    println!(
        "Mesh: {} vertices, {} triangles",
        island.mesh.positions.len(),
        island.mesh.indices.len() / 3
    );

    let height_path = format!("{}_height.png", args.output);
    let shore_path = format!("{}_shore.png", args.output);
    export::export_grayscale(&island.height, &height_path)?;
    export::export_shore_composite(
        &island.height,
        &island.beach,
        &island.cliff,
        config.shore.water_level,
        &shore_path,
    )?;

    println!("Wrote {} and {}", height_path, shore_path);

    Ok(())
}
