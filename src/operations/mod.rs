//! Boolean combinators for SDFs
//!
//! Hard union plus the smooth blending variants used to merge primitives
//! into a single field. All functions are pure and defined for every real
//! input, including zero blend radius.

mod smooth;
mod union;

pub use smooth::{round_min, sdf_smooth_union, smooth_min};
pub use union::sdf_union;
