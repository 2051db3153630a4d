//! blobmesh CLI
//!
//! Scatters random spheres in the unit cube, blends them with a smooth
//! union, polygonizes the field and writes a Wavefront OBJ.

use blobmesh::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "blobmesh")]
#[command(version = blobmesh::VERSION)]
#[command(about = "Blend random sphere SDFs and polygonize them to an OBJ mesh", long_about = None)]
struct Cli {
    /// Grid resolution per axis
    #[arg(short = 'n', long, default_value_t = 128)]
    resolution: usize,

    /// Number of spheres to scatter
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// Sphere radius
    #[arg(short, long, default_value_t = 0.01)]
    radius: f32,

    /// Smooth-union blend radius
    #[arg(short, long, default_value_t = 0.1)]
    blend: f32,

    /// Random seed for sphere placement
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Output OBJ path
    #[arg(short, long, default_value = "mesh.obj")]
    output: PathBuf,

    /// Load the scene from a JSON file instead of scattering
    #[arg(long, conflicts_with_all = ["count", "radius", "seed"])]
    scene: Option<PathBuf>,

    /// Save the generated scene to a JSON file
    #[arg(long)]
    save_scene: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let scene = match &cli.scene {
        Some(path) => load_scene_json(path)?,
        None => Scene::scatter(cli.count, cli.radius, cli.blend, cli.seed)?,
    };

    if let Some(path) = &cli.save_scene {
        save_scene_json(&scene, path)?;
    }

    // Grid covering the unit cube plus the blend halo around it
    let max_radius = scene
        .primitives()
        .iter()
        .map(|p| match p {
            Primitive::Sphere { radius, .. } => *radius,
        })
        .fold(0.0f32, f32::max);
    let margin = scene.blend_radius() + max_radius;
    let grid = Grid::covering(
        Vec3::splat(-margin),
        1.0 + 2.0 * margin,
        cli.resolution,
    )?;

    let t = Instant::now();
    let field = sample_parallel(&scene, &grid);
    println!(
        "sampled {} points in {:.1?}",
        grid.sample_count(),
        t.elapsed()
    );

    let t = Instant::now();
    let mesh = extract_parallel(&field, &grid, 0.0);
    println!(
        "extracted {} triangles ({} vertices) in {:.1?}",
        mesh.triangle_count(),
        mesh.vertex_count(),
        t.elapsed()
    );

    let t = Instant::now();
    export_obj(&mesh, &cli.output)?;
    println!("wrote {} in {:.1?}", cli.output.display(), t.elapsed());

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
