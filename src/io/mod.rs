//! File I/O: mesh export and scene persistence
//!
//! The core pipeline hands its mesh to [`export_obj`]; scene
//! configurations round-trip through a human-readable JSON format.
//! Export failures surface as [`IoError`] — the computed mesh is left
//! untouched, but the run is considered unsuccessful.

mod json;
mod obj;

pub use json::{load_scene_json, save_scene_json};
pub use obj::{export_obj, write_obj};

use thiserror::Error;

/// File I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Loaded scene failed validation
    #[error("Invalid scene: {0}")]
    InvalidScene(#[from] crate::scene::SceneError),
}
