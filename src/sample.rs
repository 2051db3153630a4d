//! Volumetric sampler: dense scene evaluation over a grid
//!
//! Every sample is a pure function of its world position and each write
//! lands in a distinct buffer slot, so the parallel path needs no
//! synchronization beyond the final join. Serial and parallel paths run
//! identical per-sample arithmetic and therefore produce bit-identical
//! buffers.
//!
//! The Z-slice `par_chunks_mut` split keeps coordinate reconstruction free
//! of integer division in the hot loop.

use crate::field::ScalarField;
use crate::grid::Grid;
use crate::scene::Scene;
use glam::Vec3;
use rayon::prelude::*;

/// Evaluate the scene at every grid sample (single-threaded)
///
/// # Arguments
/// * `scene` - The scene to evaluate
/// * `grid` - Sampling lattice
///
/// # Returns
/// Fully-populated scalar field buffer
pub fn sample(scene: &Scene, grid: &Grid) -> ScalarField {
    let n = grid.resolution();
    let origin = grid.origin();
    let step = grid.cell_size();

    let mut buffer = vec![0.0f32; grid.sample_count()];

    for z in 0..n {
        let z_pos = origin.z + z as f32 * step;
        for y in 0..n {
            let y_pos = origin.y + y as f32 * step;
            let row_offset = (z * n + y) * n;
            for x in 0..n {
                let x_pos = origin.x + x as f32 * step;
                buffer[row_offset + x] = scene.distance(Vec3::new(x_pos, y_pos, z_pos));
            }
        }
    }

    ScalarField::from_values(buffer, n)
}

/// Evaluate the scene at every grid sample (parallel)
///
/// Parallelizes by Z-slices; each rayon worker owns a disjoint slice of
/// the output buffer. Bit-identical to [`sample`].
pub fn sample_parallel(scene: &Scene, grid: &Grid) -> ScalarField {
    let n = grid.resolution();
    let origin = grid.origin();
    let step = grid.cell_size();

    let mut buffer = vec![0.0f32; grid.sample_count()];
    let slice_size = n * n;

    buffer
        .par_chunks_mut(slice_size)
        .enumerate()
        .for_each(|(z, slice)| {
            let z_pos = origin.z + z as f32 * step;

            for y in 0..n {
                let y_pos = origin.y + y as f32 * step;
                let row_offset = y * n;

                for x in 0..n {
                    let x_pos = origin.x + x as f32 * step;
                    slice[row_offset + x] = scene.distance(Vec3::new(x_pos, y_pos, z_pos));
                }
            }
        });

    ScalarField::from_values(buffer, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Primitive, Scene, FAR_OUTSIDE};

    fn sphere_scene(center: Vec3, r: f32) -> Scene {
        Scene::new(vec![Primitive::sphere(center, r).unwrap()], 0.0).unwrap()
    }

    #[test]
    fn test_empty_scene_field_is_constant() {
        let grid = Grid::covering(Vec3::ZERO, 1.0, 4).unwrap();
        let field = sample(&Scene::empty(), &grid);
        assert!(field.values().iter().all(|&v| v == FAR_OUTSIDE));
    }

    #[test]
    fn test_sample_matches_direct_evaluation() {
        let grid = Grid::covering(Vec3::splat(-1.0), 2.0, 8).unwrap();
        let scene = sphere_scene(Vec3::ZERO, 0.5);
        let field = sample(&scene, &grid);

        for z in 0..8 {
            for y in 0..8 {
                for x in 0..8 {
                    let expected = scene.distance(grid.world_pos(x, y, z));
                    assert_eq!(field.get(x, y, z), expected);
                }
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial_bitwise() {
        let grid = Grid::covering(Vec3::splat(-1.0), 2.0, 16).unwrap();
        let scene = Scene::scatter(20, 0.1, 0.05, 99).unwrap();

        let serial = sample(&scene, &grid);
        let parallel = sample_parallel(&scene, &grid);
        assert_eq!(serial.values(), parallel.values());
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let grid = Grid::covering(Vec3::splat(-0.5), 1.5, 12).unwrap();
        let scene = Scene::scatter(10, 0.08, 0.1, 5).unwrap();

        let a = sample_parallel(&scene, &grid);
        let b = sample_parallel(&scene, &grid);
        assert_eq!(a.values(), b.values());
    }
}
