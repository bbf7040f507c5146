//! The drawing surface — a 28×28 grid of ink intensities.

use ndarray::Array2;

/// Grid height in cells, matching the MNIST input resolution.
pub const ROWS: usize = 28;
/// Grid width in cells.
pub const COLS: usize = 28;
/// Flattened input length fed to the network.
pub const PIXELS: usize = ROWS * COLS;

/// Ink intensities in [0, 1], row-major. 0.0 is blank background, 1.0 is
/// full ink. Mutated in place by painting and reset (never reallocated)
/// by [`PixelGrid::clear`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    data: Array2<f32>,
}

impl PixelGrid {
    pub fn new() -> Self {
        Self {
            data: Array2::zeros((ROWS, COLS)),
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// True when no ink has been laid down at all.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[[row, col]]
    }

    pub fn set(&mut self, row: usize, col: usize, intensity: f32) {
        self.data[[row, col]] = intensity.clamp(0.0, 1.0);
    }

    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new()
    }
}
