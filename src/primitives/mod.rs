//! Primitive SDF building blocks
//!
//! Pure distance functions, total over all finite inputs. Negative inside,
//! zero on the surface, positive outside.

mod sphere;

pub use sphere::{sdf_sphere, sdf_sphere_at};
