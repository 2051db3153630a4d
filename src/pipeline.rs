//! The three-stage pipeline: scene → field → mesh
//!
//! Strict staging: the extractor never sees partial sampler output, and
//! no stage depends on results of a later one. Aborting a run simply
//! drops the in-progress buffers; there is no partial-result recovery.

use crate::grid::Grid;
use crate::mesh::{extract, extract_parallel, Mesh};
use crate::sample::{sample, sample_parallel};
use crate::scene::Scene;

/// Polygonize a scene over a grid (parallel sampling and extraction)
///
/// # Arguments
/// * `scene` - The scene to polygonize
/// * `grid` - Sampling lattice; the surface is clipped at its bounds
///
/// # Returns
/// Triangle mesh of the scene's zero level set; empty for an empty scene
pub fn polygonize(scene: &Scene, grid: &Grid) -> Mesh {
    let field = sample_parallel(scene, grid);
    extract_parallel(&field, grid, 0.0)
}

/// Polygonize a scene on a single thread
///
/// Reference path; produces geometry identical to [`polygonize`].
pub fn polygonize_serial(scene: &Scene, grid: &Grid) -> Mesh {
    let field = sample(scene, grid);
    extract(&field, grid, 0.0)
}
