//! Sampling lattice: affine map from integer cells to world space

use glam::Vec3;

/// Grid construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Resolution must be at least 2 samples per axis to form one cell
    #[error("grid resolution must be >= 2, got {0}")]
    BadResolution(usize),
    /// Cell size must be positive and finite
    #[error("grid cell size must be positive and finite, got {0}")]
    BadCellSize(f32),
    /// Origin coordinates must be finite
    #[error("grid origin must be finite")]
    NonFiniteOrigin,
}

/// A fixed-resolution N×N×N sampling lattice
///
/// Maps integer sample coordinates `(i, j, k)` in `[0, N)³` to world space
/// through `origin + (i, j, k) * cell_size`. The mapping is affine and
/// invertible; construction rejects degenerate parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    origin: Vec3,
    cell_size: f32,
    resolution: usize,
}

impl Grid {
    /// Create a grid from origin, uniform cell size and per-axis sample count
    ///
    /// # Errors
    /// Rejects `resolution < 2`, non-positive or non-finite `cell_size`,
    /// and non-finite origins. A single sample per axis spans zero cells,
    /// so `resolution == 1` is treated as the same configuration error as
    /// zero rather than as a valid empty-mesh run.
    pub fn new(origin: Vec3, cell_size: f32, resolution: usize) -> Result<Self, GridError> {
        if resolution < 2 {
            return Err(GridError::BadResolution(resolution));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::BadCellSize(cell_size));
        }
        if !origin.is_finite() {
            return Err(GridError::NonFiniteOrigin);
        }
        Ok(Grid {
            origin,
            cell_size,
            resolution,
        })
    }

    /// Grid spanning a cube of side `extent` starting at `min`
    ///
    /// The first sample lands on `min` and the last on `min + extent`.
    pub fn covering(min: Vec3, extent: f32, resolution: usize) -> Result<Self, GridError> {
        if resolution < 2 {
            return Err(GridError::BadResolution(resolution));
        }
        let cell_size = extent / (resolution as f32 - 1.0);
        Grid::new(min, cell_size, resolution)
    }

    /// World-space position of sample `(i, j, k)`
    #[inline(always)]
    pub fn world_pos(&self, i: usize, j: usize, k: usize) -> Vec3 {
        self.origin + Vec3::new(i as f32, j as f32, k as f32) * self.cell_size
    }

    /// Grid origin (position of sample `(0, 0, 0)`)
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Uniform spacing between adjacent samples
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Samples per axis (N)
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// World-space side length of the sampled cube
    pub fn extent(&self) -> f32 {
        self.cell_size * (self.resolution as f32 - 1.0)
    }

    /// Total number of samples, N³
    pub fn sample_count(&self) -> usize {
        self.resolution * self.resolution * self.resolution
    }

    /// Marching-cubes cells per axis, N − 1
    pub fn cells_per_axis(&self) -> usize {
        self.resolution - 1
    }
}
