//! Common test helpers for blobmesh integration tests

use blobmesh::prelude::*;

/// A single sphere of radius `r` centered in a grid spanning [-1, 1]³
pub fn centered_sphere_scene(r: f32) -> Scene {
    Scene::new(vec![Primitive::sphere(Vec3::ZERO, r).unwrap()], 0.0).unwrap()
}

/// Grid spanning [-1, 1]³ with `n` samples per axis
pub fn unit_grid(n: usize) -> Grid {
    Grid::covering(Vec3::splat(-1.0), 2.0, n).unwrap()
}

/// Two spheres overlapping by less than their combined radii, blended
///
/// Centers 0.2 apart with radius 0.3 each; the seam midplane sits at
/// x = 0.2, deliberately off the grid's symmetry planes so coarse grids
/// still place vertices inside the blend zone.
pub fn blended_pair_scene(k: f32) -> Scene {
    Scene::new(
        vec![
            Primitive::sphere(Vec3::new(0.1, 0.0, 0.0), 0.3).unwrap(),
            Primitive::sphere(Vec3::new(0.3, 0.0, 0.0), 0.3).unwrap(),
        ],
        k,
    )
    .unwrap()
}

/// The seam midplane x-coordinate of [`blended_pair_scene`]
pub const PAIR_MIDPLANE_X: f32 = 0.2;

/// Assert two floats are within `tol`, with a labelled failure message
pub fn assert_close(a: f32, b: f32, tol: f32, label: &str) {
    assert!(
        (a - b).abs() <= tol,
        "{label}: {a} vs {b} (tol {tol})"
    );
}
