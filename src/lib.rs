//! # blobmesh
//!
//! Converts a procedural volumetric scene — sphere SDF primitives blended
//! with a smooth union — into an explicit triangle mesh.
//!
//! The pipeline is three strict stages:
//!
//! 1. **Scene**: an ordered list of sphere primitives folded together with
//!    a polynomial smooth union, exposing one signed-distance function.
//! 2. **Sampler**: dense evaluation of that function over a fixed N×N×N
//!    grid into a flat scalar field buffer (embarrassingly parallel).
//! 3. **Extractor**: marching cubes over the field, producing vertex
//!    positions and triangle indices at the zero level set.
//!
//! The resulting mesh is exported as Wavefront OBJ.
//!
//! ## Example
//!
//! ```rust
//! use blobmesh::prelude::*;
//!
//! // Two overlapping spheres, gently blended
//! let scene = Scene::new(
//!     vec![
//!         Primitive::sphere(Vec3::new(-0.2, 0.0, 0.0), 0.3).unwrap(),
//!         Primitive::sphere(Vec3::new(0.2, 0.0, 0.0), 0.3).unwrap(),
//!     ],
//!     0.1,
//! )
//! .unwrap();
//!
//! let grid = Grid::covering(Vec3::splat(-0.8), 1.6, 32).unwrap();
//! let mesh = polygonize(&scene, &grid);
//! assert!(mesh.triangle_count() > 0);
//! ```

#![warn(missing_docs)]

pub mod primitives;
pub mod operations;
pub mod scene;
pub mod grid;
pub mod field;
pub mod sample;
pub mod mesh;
pub mod io;
pub mod pipeline;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::field::ScalarField;
    pub use crate::grid::{Grid, GridError};
    pub use crate::io::{export_obj, load_scene_json, save_scene_json, write_obj, IoError};
    pub use crate::mesh::{extract, extract_parallel, Mesh};
    pub use crate::operations::{round_min, sdf_smooth_union, sdf_union, smooth_min};
    pub use crate::pipeline::{polygonize, polygonize_serial};
    pub use crate::sample::{sample, sample_parallel};
    pub use crate::scene::{Primitive, Scene, SceneError, FAR_OUTSIDE};
    pub use glam::Vec3;
}
