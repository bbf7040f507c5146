//! MNIST-style preprocessing of the raw drawing grid.
//!
//! The network was trained on centered, lightly smoothed, contrast-stretched
//! images, so the raw grid goes through the same pipeline before inference:
//! scale to 8-bit, recenter the intensity-weighted center of mass, blur with
//! a small Gaussian, stretch to [0, 1], and flatten row-major.

use ndarray::{Array1, Array2};

use crate::grid::{COLS, PIXELS, PixelGrid, ROWS};

/// Blur sigma matching the implicit smoothing in the training distribution.
const BLUR_SIGMA: f32 = 0.5;

/// Produce the 784-length network input for the current drawing.
///
/// An entirely blank grid short-circuits to an all-zero vector; callers skip
/// inference for that case and show the zero-confidence state instead.
pub fn preprocess(grid: &PixelGrid) -> Array1<f32> {
    if grid.is_empty() {
        return Array1::zeros(PIXELS);
    }

    let img = grid.as_array().mapv(|v| (v * 255.0) as u8);

    let (shift_row, shift_col) = recentering_shift(&img);
    let shifted = translate(&img, shift_row, shift_col);

    let blurred = gaussian_blur(&shifted.mapv(f32::from), BLUR_SIGMA);
    let stretched = contrast_stretch(blurred);

    Array1::from_iter(stretched.iter().copied())
}

/// Integer shift that moves the intensity-weighted center of mass to the
/// geometric grid center, truncated toward zero.
fn recentering_shift(img: &Array2<u8>) -> (isize, isize) {
    let mut weight = 0.0f64;
    let mut row_sum = 0.0f64;
    let mut col_sum = 0.0f64;

    for ((row, col), &value) in img.indexed_iter() {
        if value > 0 {
            let w = f64::from(value);
            weight += w;
            row_sum += w * row as f64;
            col_sum += w * col as f64;
        }
    }
    if weight == 0.0 {
        return (0, 0);
    }

    let center_row = row_sum / weight;
    let center_col = col_sum / weight;
    let shift_row = ((ROWS / 2) as f64 - center_row).trunc() as isize;
    let shift_col = ((COLS / 2) as f64 - center_col).trunc() as isize;
    (shift_row, shift_col)
}

/// Translate the image by the given offsets, filling exposed area with
/// background (0).
fn translate(img: &Array2<u8>, shift_row: isize, shift_col: isize) -> Array2<u8> {
    let mut out = Array2::zeros((ROWS, COLS));
    for row in 0..ROWS {
        for col in 0..COLS {
            let src_row = row as isize - shift_row;
            let src_col = col as isize - shift_col;
            if (0..ROWS as isize).contains(&src_row) && (0..COLS as isize).contains(&src_col) {
                out[[row, col]] = img[[src_row as usize, src_col as usize]];
            }
        }
    }
    out
}

/// Normalized 1D Gaussian kernel truncated at 3 sigma.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as i32;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Separable Gaussian blur. Samples outside the image read as background 0.
fn gaussian_blur(img: &Array2<f32>, sigma: f32) -> Array2<f32> {
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;
    let (rows, cols) = img.dim();

    let mut horizontal = Array2::zeros((rows, cols));
    for row in 0..rows {
        for col in 0..cols {
            let mut acc = 0.0;
            for (i, &w) in kernel.iter().enumerate() {
                let src = col as isize + i as isize - radius;
                if (0..cols as isize).contains(&src) {
                    acc += w * img[[row, src as usize]];
                }
            }
            horizontal[[row, col]] = acc;
        }
    }

    let mut out = Array2::zeros((rows, cols));
    for row in 0..rows {
        for col in 0..cols {
            let mut acc = 0.0;
            for (i, &w) in kernel.iter().enumerate() {
                let src = row as isize + i as isize - radius;
                if (0..rows as isize).contains(&src) {
                    acc += w * horizontal[[src as usize, col]];
                }
            }
            out[[row, col]] = acc;
        }
    }
    out
}

/// Linearly rescale so the minimum maps to 0.0 and the maximum to 1.0.
/// A constant image is left unchanged.
fn contrast_stretch(mut img: Array2<f32>) -> Array2<f32> {
    let min = img.iter().copied().fold(f32::INFINITY, f32::min);
    let max = img.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if max > min {
        img.mapv_inplace(|v| (v - min) / (max - min));
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::grid::PixelGrid;

    #[test]
    fn blank_grid_short_circuits_to_zeros() {
        let out = preprocess(&PixelGrid::new());
        assert_eq!(out.len(), PIXELS);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn shift_recenters_a_single_pixel() {
        let mut img = Array2::zeros((ROWS, COLS));
        img[[20, 8]] = 255u8;
        assert_eq!(recentering_shift(&img), (-6, 6));

        let moved = translate(&img, -6, 6);
        assert_eq!(moved[[14, 14]], 255);
        assert_eq!(moved.iter().filter(|&&v| v > 0).count(), 1);
    }

    #[test]
    fn shift_is_weighted_by_intensity() {
        let mut img = Array2::zeros((ROWS, COLS));
        // Mass 3:1 between rows 10 and 18 pulls the center toward row 12.
        img[[10, 14]] = 240u8;
        img[[18, 14]] = 80u8;
        let (shift_row, shift_col) = recentering_shift(&img);
        assert_eq!(shift_row, 2);
        assert_eq!(shift_col, 0);
    }

    #[test]
    fn translate_fills_exposed_area_with_background() {
        let mut img = Array2::zeros((ROWS, COLS));
        img[[0, 0]] = 200u8;
        let moved = translate(&img, 5, 5);
        assert_eq!(moved[[5, 5]], 200);
        assert_eq!(moved[[0, 0]], 0);

        // Shifting off the edge loses the pixel entirely.
        let gone = translate(&img, -1, -1);
        assert!(gone.iter().all(|&v| v == 0));
    }

    #[test]
    fn blur_preserves_interior_mass() {
        let mut img = Array2::zeros((ROWS, COLS));
        img[[14, 14]] = 1.0f32;
        let blurred = gaussian_blur(&img, BLUR_SIGMA);

        let total: f32 = blurred.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-5);
        // The peak stays where the mass was.
        let peak = blurred
            .indexed_iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(idx, _)| idx)
            .unwrap();
        assert_eq!(peak, (14, 14));
    }

    #[test]
    fn contrast_stretch_maps_extremes_to_unit_range() {
        let img = Array2::from_shape_fn((2, 2), |(r, c)| 2.0 + 2.0 * (r * 2 + c) as f32);
        let stretched = contrast_stretch(img);
        assert_relative_eq!(stretched[[0, 0]], 0.0);
        assert_relative_eq!(stretched[[1, 1]], 1.0);
        assert_relative_eq!(stretched[[0, 1]], 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn constant_image_is_left_unchanged() {
        let img = Array2::from_elem((4, 4), 0.25f32);
        let stretched = contrast_stretch(img.clone());
        assert_eq!(stretched, img);
    }

    #[test]
    fn preprocess_centers_an_off_center_dab() {
        let mut grid = PixelGrid::new();
        grid.set(20, 20, 1.0);

        let out = preprocess(&grid);
        assert_eq!(out.len(), PIXELS);

        // Contrast stretch puts the peak at exactly 1.0 on the recentered cell.
        assert_relative_eq!(out[14 * COLS + 14], 1.0);

        // Center of mass of the output is at the grid center within rounding.
        let mut weight = 0.0f32;
        let (mut row_acc, mut col_acc) = (0.0f32, 0.0f32);
        for (i, &v) in out.iter().enumerate() {
            weight += v;
            row_acc += v * (i / COLS) as f32;
            col_acc += v * (i % COLS) as f32;
        }
        assert_relative_eq!(row_acc / weight, 14.0, epsilon = 0.5);
        assert_relative_eq!(col_acc / weight, 14.0, epsilon = 0.5);
    }
}
