//! Smooth blending combinators for SDFs
//!
//! The polynomial smooth minimum is the workhorse: it rounds the crease
//! where two distance fields meet, and degenerates to the hard minimum as
//! the blend radius approaches zero. `round_min` is the alternative
//! circular-arc blend sometimes preferred for very small primitives.

use glam::Vec2;

/// Polynomial smooth minimum
///
/// Branchless k=0 safety: clamps k to epsilon via max(), which compiles
/// to a single maxss instruction on x86. At k = 0 the correction term is
/// bounded by 2.5e-11, so the result equals `a.min(b)` within float
/// tolerance.
///
/// The result never exceeds `a.min(b)`: the blend only carves inward.
#[inline(always)]
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    let k = k.max(1e-10);
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * k * 0.25
}

/// Smooth union of two SDFs
#[inline(always)]
pub fn sdf_smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    smooth_min(d1, d2, k)
}

/// Round-union minimum
///
/// Blends the two fields along a circular arc of radius `r`. Equivalent to
/// the hard minimum whenever both inputs are farther than `r` apart from
/// the blend zone, and converges to `min(a, b)` as `r -> 0`.
#[inline(always)]
pub fn round_min(a: f32, b: f32, r: f32) -> f32 {
    let u = Vec2::new((r - a).max(0.0), (r - b).max(0.0));
    r.max(a.min(b)) - u.length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_min_never_exceeds_hard_min() {
        let cases = [
            (1.0, 3.0, 0.5),
            (-0.5, 0.2, 0.3),
            (0.0, 0.0, 1.0),
            (2.0, -2.0, 0.1),
            (0.7, 0.7, 0.0),
        ];
        for (a, b, k) in cases {
            let s = smooth_min(a, b, k);
            assert!(
                s <= a.min(b) + 1e-6,
                "smooth_min({a}, {b}, {k}) = {s} exceeds min"
            );
        }
    }

    #[test]
    fn test_smooth_min_zero_k_is_hard_min() {
        let a = 0.3;
        let b = -0.8;
        assert!((smooth_min(a, b, 0.0) - a.min(b)).abs() < 1e-6);
        // equal inputs are the worst case for the k guard
        assert!((smooth_min(0.5, 0.5, 0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_min_far_apart_is_hard_min() {
        // |a - b| >> k: no blend contribution
        let result = smooth_min(0.1, 5.0, 0.2);
        assert!((result - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_union_symmetry() {
        let d1 = 0.5;
        let d2 = 0.8;
        let k = 0.3;
        assert!((sdf_smooth_union(d1, d2, k) - sdf_smooth_union(d2, d1, k)).abs() < 0.0001);
    }

    #[test]
    fn test_round_min_converges_to_hard_min() {
        let a = 0.4;
        let b = 0.9;
        assert!((round_min(a, b, 1e-6) - a.min(b)).abs() < 1e-4);
    }

    #[test]
    fn test_round_min_blends_inward() {
        // near-equal distances inside the blend radius pull the surface in
        let blended = round_min(0.05, 0.05, 0.1);
        assert!(blended < 0.05);
    }
}
