//! Antialiased circular brush rasterization.
//!
//! Pointer coordinates are in canvas pixels (cell size × grid dimension).
//! Each paint call stamps a soft disc: cells whose centers fall inside the
//! brush radius get a linear-falloff intensity, accumulated with `max` so
//! re-painting an already-darker cell is a no-op.

use crate::grid::{COLS, PixelGrid, ROWS};

/// Brush radius as a multiple of the cell size, matching the feel the
/// network's training data was produced with.
pub const RADIUS_CELLS: f32 = 1.5;

/// Geometry of the brush relative to the on-screen canvas.
#[derive(Debug, Clone, Copy)]
pub struct BrushSpec {
    pub cell_size: f32,
    pub radius: f32,
}

impl BrushSpec {
    /// Standard brush for a canvas drawn at `cell_size` pixels per cell.
    pub fn for_cell_size(cell_size: f32) -> Self {
        Self {
            cell_size,
            radius: cell_size * RADIUS_CELLS,
        }
    }
}

/// A single cell whose stored intensity increased during a paint call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub intensity: f32,
}

/// Stamp the brush at pointer position `(x, y)` in canvas pixels.
///
/// Returns the cells that actually changed so the caller can refresh their
/// visuals and skip inference entirely when the stamp was a no-op.
/// Coordinates outside the canvas are fine; the affected range is clipped
/// to valid cells.
pub fn paint(grid: &mut PixelGrid, brush: &BrushSpec, x: f32, y: f32) -> Vec<CellChange> {
    let cell = brush.cell_size;
    let radius = brush.radius;

    // Bounding cell range of the brush disc, clipped to the grid.
    let r_min = (((y - radius) / cell).floor().max(0.0)) as usize;
    let r_max = ((((y + radius) / cell).floor()) as isize).min(ROWS as isize - 1);
    let c_min = (((x - radius) / cell).floor().max(0.0)) as usize;
    let c_max = ((((x + radius) / cell).floor()) as isize).min(COLS as isize - 1);

    let mut changes = Vec::new();
    if r_max < 0 || c_max < 0 {
        return changes;
    }
    let (r_max, c_max) = (r_max as usize, c_max as usize);

    for row in r_min..=r_max {
        for col in c_min..=c_max {
            let cx = (col as f32 + 0.5) * cell;
            let cy = (row as f32 + 0.5) * cell;
            let dist = (cx - x).hypot(cy - y);

            if dist <= radius {
                let intensity = 1.0 - dist / radius;
                if intensity > grid.get(row, col) {
                    grid.set(row, col, intensity);
                    changes.push(CellChange {
                        row,
                        col,
                        intensity,
                    });
                }
            }
        }
    }

    changes
}
