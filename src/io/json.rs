//! Scene configuration persistence as JSON

use crate::io::IoError;
use crate::scene::{Primitive, Scene};
use std::path::Path;

/// Save a scene to a JSON file
pub fn save_scene_json(scene: &Scene, path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = std::fs::File::create(path)?;
    let w = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(w, scene).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Load a scene from a JSON file
///
/// Re-validates the deserialized scene so invalid configurations are
/// rejected here, before any sampling begins. Every primitive is rebuilt
/// through its validating constructor; the serde derive alone would
/// accept a negative or non-finite radius.
pub fn load_scene_json(path: impl AsRef<Path>) -> Result<Scene, IoError> {
    let file = std::fs::File::open(path)?;
    let r = std::io::BufReader::new(file);
    let scene: Scene =
        serde_json::from_reader(r).map_err(|e| IoError::Serialization(e.to_string()))?;

    // Round through the validating constructors
    let primitives = scene
        .primitives()
        .iter()
        .map(|p| match p {
            Primitive::Sphere { center, radius } => Primitive::sphere(*center, *radius),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let scene = Scene::new(primitives, scene.blend_radius())?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;
    use glam::Vec3;

    #[test]
    fn test_scene_json_round_trip() {
        let dir = std::env::temp_dir().join("blobmesh_test_io");
        std::fs::create_dir_all(&dir).ok();
        let path = dir.join("scene.json");

        let scene = Scene::new(
            vec![
                Primitive::sphere(Vec3::new(0.1, 0.2, 0.3), 0.4).unwrap(),
                Primitive::sphere(Vec3::splat(0.5), 0.25).unwrap(),
            ],
            0.1,
        )
        .unwrap();

        save_scene_json(&scene, &path).expect("save failed");
        let loaded = load_scene_json(&path).expect("load failed");

        assert_eq!(loaded.primitives(), scene.primitives());
        assert_eq!(loaded.blend_radius(), scene.blend_radius());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_negative_radius_rejected_on_load() {
        let dir = std::env::temp_dir().join("blobmesh_test_io");
        std::fs::create_dir_all(&dir).ok();
        let path = dir.join("bad_radius_scene.json");

        let json = r#"{"primitives":[{"Sphere":{"center":[0.0,0.0,0.0],"radius":-0.5}}],"blend_radius":0.0}"#;
        std::fs::write(&path, json).unwrap();

        let result = load_scene_json(&path);
        assert!(matches!(result, Err(IoError::InvalidScene(_))));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_non_finite_radius_rejected_on_load() {
        let dir = std::env::temp_dir().join("blobmesh_test_io");
        std::fs::create_dir_all(&dir).ok();
        let path = dir.join("nan_radius_scene.json");

        // 1e999 overflows to infinity during parsing
        let json = r#"{"primitives":[{"Sphere":{"center":[0.0,0.0,0.0],"radius":1e999}}],"blend_radius":0.0}"#;
        std::fs::write(&path, json).unwrap();

        assert!(matches!(
            load_scene_json(&path),
            Err(IoError::InvalidScene(_))
        ));

        std::fs::remove_file(&path).ok();
    }
}
