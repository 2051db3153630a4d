//! Triangle mesh output and isosurface extraction

mod marching_cubes;

pub use marching_cubes::{extract, extract_parallel};

use glam::Vec3;

/// A triangle mesh: vertex positions plus a flat triangle index list
///
/// Indices come in triples; every index refers into `positions`.
/// Vertices are appended in generation order and are not deduplicated —
/// adjacent cells may emit coincident vertices, which is acceptable for
/// the export formats downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, insertion order = generation order
    pub positions: Vec<Vec3>,
    /// Triangle corner indices, three per triangle
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Concatenate sub-meshes, rebasing indices
    ///
    /// Used to merge the private per-slab buffers produced by parallel
    /// extraction; concatenation order is the slab order, keeping the
    /// result deterministic.
    pub fn merge(sub_meshes: Vec<Mesh>) -> Mesh {
        let total_vertices: usize = sub_meshes.iter().map(|m| m.positions.len()).sum();
        let total_indices: usize = sub_meshes.iter().map(|m| m.indices.len()).sum();

        let mut merged = Mesh {
            positions: Vec::with_capacity(total_vertices),
            indices: Vec::with_capacity(total_indices),
        };

        for sub in sub_meshes {
            let base_idx = merged.positions.len() as u32;
            merged.positions.extend(sub.positions);
            merged.indices.extend(sub.indices.iter().map(|i| i + base_idx));
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh_counts() {
        let mesh = Mesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_merge_rebases_indices() {
        let a = Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            indices: vec![0, 1, 2],
        };
        let b = Mesh {
            positions: vec![Vec3::Z, Vec3::ONE, Vec3::NEG_ONE],
            indices: vec![0, 1, 2],
        };

        let merged = Mesh::merge(vec![a, b]);
        assert_eq!(merged.vertex_count(), 6);
        assert_eq!(merged.indices, vec![0, 1, 2, 3, 4, 5]);
    }
}
