//! Dense scalar field buffer
//!
//! One flat `Vec<f32>` with computed strides instead of nested arrays:
//! single owner, no aliasing, no pointer chasing in the extraction loop.

/// A dense N×N×N buffer of signed distances
///
/// Created by the sampler and immutable afterwards. Samples are stored
/// X-major: `index = x + y*N + z*N*N`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    values: Vec<f32>,
    resolution: usize,
}

impl ScalarField {
    /// Wrap a fully-populated buffer
    ///
    /// Callers (the sampler) guarantee `values.len() == resolution³`.
    pub(crate) fn from_values(values: Vec<f32>, resolution: usize) -> Self {
        debug_assert_eq!(values.len(), resolution * resolution * resolution);
        ScalarField { values, resolution }
    }

    /// Flat index of sample `(x, y, z)`
    #[inline(always)]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.resolution + z * self.resolution * self.resolution
    }

    /// Signed distance stored at sample `(x, y, z)`
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
        self.values[self.index(x, y, z)]
    }

    /// The raw X-major sample buffer
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Samples per axis
    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_x_major() {
        let n = 4;
        let values: Vec<f32> = (0..n * n * n).map(|i| i as f32).collect();
        let field = ScalarField::from_values(values, n);

        assert_eq!(field.index(0, 0, 0), 0);
        assert_eq!(field.index(1, 0, 0), 1);
        assert_eq!(field.index(0, 1, 0), 4);
        assert_eq!(field.index(0, 0, 1), 16);
        assert_eq!(field.get(3, 3, 3), 63.0);
    }
}
