//! Hard union operation for SDFs

/// Union of two SDFs (minimum distance)
///
/// # Returns
/// Minimum of the two distances
#[inline(always)]
pub fn sdf_union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}
