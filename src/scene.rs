//! Scene: an ordered collection of primitives under a smooth union
//!
//! A [`Scene`] folds [`smooth_min`] over every primitive's distance,
//! left to right, starting from the [`FAR_OUTSIDE`] identity. The fold
//! order only affects floating-point rounding, never semantics — the
//! union is order-independent by intent.
//!
//! Configuration errors (negative radius, non-finite values) are rejected
//! here, at construction time, before any sampling begins.

use crate::operations::smooth_min;
use crate::primitives::sdf_sphere_at;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Distance reported for a point with no primitives anywhere near it.
///
/// Identity element of the smooth-union fold: an empty scene evaluates to
/// this constant everywhere, so its field is uniformly outside and the
/// extracted mesh is empty.
pub const FAR_OUTSIDE: f32 = 1.0;

/// Scene construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// Sphere radius is negative
    #[error("negative sphere radius: {0}")]
    NegativeRadius(f32),
    /// A coordinate or radius is NaN or infinite
    #[error("non-finite scene parameter: {0}")]
    NonFinite(f32),
    /// Blend radius is negative
    #[error("negative blend radius: {0}")]
    NegativeBlend(f32),
}

/// A single implicit primitive
///
/// Tagged variant with one distance function per kind; avoids virtual
/// dispatch in the per-cell hot loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Sphere at an arbitrary center
    Sphere {
        /// Sphere center in world space
        center: Vec3,
        /// Sphere radius, always >= 0
        radius: f32,
    },
}

impl Primitive {
    /// Create a sphere primitive
    ///
    /// # Errors
    /// Rejects negative radius and non-finite center or radius.
    pub fn sphere(center: Vec3, radius: f32) -> Result<Self, SceneError> {
        if !radius.is_finite() {
            return Err(SceneError::NonFinite(radius));
        }
        if radius < 0.0 {
            return Err(SceneError::NegativeRadius(radius));
        }
        if !center.is_finite() {
            return Err(SceneError::NonFinite(center.x));
        }
        Ok(Primitive::Sphere { center, radius })
    }

    /// Signed distance from `point` to this primitive's surface
    #[inline(always)]
    pub fn distance(&self, point: Vec3) -> f32 {
        match self {
            Primitive::Sphere { center, radius } => sdf_sphere_at(point, *center, *radius),
        }
    }
}

/// An ordered sequence of primitives combined with a smooth union
///
/// Read-only after construction; may be shared freely across parallel
/// workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    primitives: Vec<Primitive>,
    blend_radius: f32,
}

impl Scene {
    /// Create a scene from validated primitives and a blend radius
    ///
    /// # Arguments
    /// * `primitives` - Primitives, folded in sequence order
    /// * `blend_radius` - Smooth-union blend radius `k`; 0 gives a hard union
    ///
    /// # Errors
    /// Rejects negative or non-finite blend radius.
    pub fn new(primitives: Vec<Primitive>, blend_radius: f32) -> Result<Self, SceneError> {
        if !blend_radius.is_finite() {
            return Err(SceneError::NonFinite(blend_radius));
        }
        if blend_radius < 0.0 {
            return Err(SceneError::NegativeBlend(blend_radius));
        }
        Ok(Scene {
            primitives,
            blend_radius,
        })
    }

    /// Scene with no primitives; evaluates to [`FAR_OUTSIDE`] everywhere
    pub fn empty() -> Self {
        Scene {
            primitives: Vec::new(),
            blend_radius: 0.0,
        }
    }

    /// Scatter `count` spheres uniformly in the unit cube
    ///
    /// Deterministic for a fixed `seed`; the same seed always produces the
    /// same placement.
    ///
    /// # Arguments
    /// * `count` - Number of spheres
    /// * `sphere_radius` - Radius of every sphere
    /// * `blend_radius` - Smooth-union blend radius
    /// * `seed` - LCG seed
    ///
    /// # Errors
    /// Same validation as [`Scene::new`] and [`Primitive::sphere`].
    pub fn scatter(
        count: usize,
        sphere_radius: f32,
        blend_radius: f32,
        seed: u64,
    ) -> Result<Self, SceneError> {
        let mut rng = seed;
        let mut primitives = Vec::with_capacity(count);
        for _ in 0..count {
            rng = lcg_next(rng);
            let x = lcg_float(rng);
            rng = lcg_next(rng);
            let y = lcg_float(rng);
            rng = lcg_next(rng);
            let z = lcg_float(rng);
            primitives.push(Primitive::sphere(Vec3::new(x, y, z), sphere_radius)?);
        }
        Scene::new(primitives, blend_radius)
    }

    /// Number of primitives in the scene
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene has no primitives
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The smooth-union blend radius `k`
    pub fn blend_radius(&self) -> f32 {
        self.blend_radius
    }

    /// The primitives, in fold order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Signed distance from `point` to the blended scene surface
    ///
    /// Folds [`smooth_min`] over every primitive distance in sequence
    /// order, starting from [`FAR_OUTSIDE`].
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.primitives.iter().fold(FAR_OUTSIDE, |acc, prim| {
            smooth_min(acc, prim.distance(point), self.blend_radius)
        })
    }
}

#[inline]
fn lcg_next(state: u64) -> u64 {
    state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

#[inline]
fn lcg_float(state: u64) -> f32 {
    ((state >> 16) as u32 as f32) / (u32::MAX as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene_is_far_outside() {
        let scene = Scene::empty();
        assert_eq!(scene.distance(Vec3::ZERO), FAR_OUTSIDE);
        assert_eq!(scene.distance(Vec3::new(5.0, -3.0, 0.1)), FAR_OUTSIDE);
    }

    #[test]
    fn test_single_sphere_center_distance() {
        let r = 0.75;
        let center = Vec3::new(0.2, -0.1, 0.4);
        let scene = Scene::new(vec![Primitive::sphere(center, r).unwrap()], 0.0).unwrap();
        // At the exact center of an isolated sphere the distance is -r
        assert!((scene.distance(center) + r).abs() < 1e-5);
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert_eq!(
            Primitive::sphere(Vec3::ZERO, -0.1),
            Err(SceneError::NegativeRadius(-0.1))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Primitive::sphere(Vec3::ZERO, f32::NAN).is_err());
        assert!(Primitive::sphere(Vec3::new(f32::INFINITY, 0.0, 0.0), 1.0).is_err());
        assert!(Scene::new(vec![], f32::NAN).is_err());
    }

    #[test]
    fn test_negative_blend_rejected() {
        assert_eq!(
            Scene::new(vec![], -1.0).unwrap_err(),
            SceneError::NegativeBlend(-1.0)
        );
    }

    #[test]
    fn test_hard_union_is_min_of_parts() {
        let a = Primitive::sphere(Vec3::new(-1.0, 0.0, 0.0), 0.5).unwrap();
        let b = Primitive::sphere(Vec3::new(1.0, 0.0, 0.0), 0.5).unwrap();
        let scene = Scene::new(vec![a, b], 0.0).unwrap();

        let p = Vec3::new(-1.0, 0.2, 0.0);
        let expected = a.distance(p).min(b.distance(p)).min(FAR_OUTSIDE);
        assert!((scene.distance(p) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let a = Scene::scatter(32, 0.05, 0.1, 42).unwrap();
        let b = Scene::scatter(32, 0.05, 0.1, 42).unwrap();
        assert_eq!(a.primitives(), b.primitives());

        let c = Scene::scatter(32, 0.05, 0.1, 43).unwrap();
        assert_ne!(a.primitives(), c.primitives());
    }

    #[test]
    fn test_scatter_stays_in_unit_cube() {
        let scene = Scene::scatter(100, 0.01, 0.1, 7).unwrap();
        for prim in scene.primitives() {
            let Primitive::Sphere { center, .. } = prim;
            assert!(center.x >= 0.0 && center.x <= 1.0);
            assert!(center.y >= 0.0 && center.y <= 1.0);
            assert!(center.z >= 0.0 && center.z <= 1.0);
        }
    }
}
