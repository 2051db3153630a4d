//! Wavefront OBJ export
//!
//! Two record kinds: `v x y z` vertex positions and `f a b c` triangular
//! faces with 1-based vertex indices. No normals, UVs or materials —
//! positions and faces are all the pipeline produces.

use crate::io::IoError;
use crate::mesh::Mesh;
use std::io::Write;
use std::path::Path;

/// Export a mesh to a Wavefront OBJ file
///
/// # Arguments
/// * `mesh` - The mesh to serialize
/// * `path` - Output file path
///
/// # Errors
/// Any underlying filesystem or write failure.
pub fn export_obj(mesh: &Mesh, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(file);

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh");

    writeln!(w, "o {}", stem)?;
    write_obj(mesh, &mut w)?;
    w.flush()?;
    Ok(())
}

/// Write OBJ records for a mesh to any writer
///
/// An empty mesh writes the header only — a valid, geometry-free OBJ.
pub fn write_obj(mesh: &Mesh, w: &mut impl Write) -> Result<(), IoError> {
    // Header
    writeln!(w, "# blobmesh OBJ export")?;
    writeln!(w, "# Vertices: {}", mesh.vertex_count())?;
    writeln!(w, "# Triangles: {}", mesh.triangle_count())?;

    for p in &mesh.positions {
        writeln!(w, "v {} {} {}", p.x, p.y, p.z)?;
    }

    // OBJ face indices are 1-based
    for tri in mesh.indices.chunks_exact(3) {
        writeln!(w, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn tri_mesh() -> Mesh {
        Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_obj_records() {
        let mut out = Vec::new();
        write_obj(&tri_mesh(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("# Vertices: 3"));
        assert!(text.contains("# Triangles: 1"));
        assert!(text.contains("v 0 0 0"));
        assert!(text.contains("v 1 0 0"));
        // faces are 1-based
        assert!(text.contains("f 1 2 3"));
    }

    #[test]
    fn test_empty_mesh_writes_header_only() {
        let mut out = Vec::new();
        write_obj(&Mesh::new(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("# Vertices: 0"));
        assert!(!text.contains("\nv "));
        assert!(!text.contains("\nf "));
    }

    #[test]
    fn test_export_round_trip_counts() {
        let dir = std::env::temp_dir().join("blobmesh_test_io");
        std::fs::create_dir_all(&dir).ok();
        let path = dir.join("tri.obj");

        export_obj(&tri_mesh(), &path).expect("export_obj failed");
        let text = std::fs::read_to_string(&path).unwrap();

        let v_lines = text.lines().filter(|l| l.starts_with("v ")).count();
        let f_lines = text.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(v_lines, 3);
        assert_eq!(f_lines, 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let parent = std::env::temp_dir().join("blobmesh_test_io_missing");
        std::fs::remove_dir_all(&parent).ok();
        let path = parent.join("nested").join("out.obj");

        let result = export_obj(&tri_mesh(), &path);
        assert!(matches!(result, Err(IoError::Io(_))));
    }
}
