//! Application state — the drawing session and its recognition results.

use digit_core::brush::{BrushSpec, paint};
use digit_core::grid::PixelGrid;
use digit_core::network::Network;
use digit_core::recognize::{RankedDigit, recognize, zero_state};

use crate::ui::canvas::CELL_SIZE;

pub struct SketchApp {
    pub grid: PixelGrid,
    pub brush: BrushSpec,
    pub model_name: String,
    pub drawing: bool,

    /// Current ranking, refreshed after every grid mutation. Starts (and
    /// returns, after Clear) in the unsorted all-zero state.
    pub ranking: Vec<RankedDigit>,

    network: Box<dyn Network>,
}

impl SketchApp {
    pub fn new(network: Box<dyn Network>, model_name: String) -> Self {
        Self {
            grid: PixelGrid::new(),
            brush: BrushSpec::for_cell_size(CELL_SIZE),
            model_name,
            drawing: false,
            ranking: zero_state(),
            network,
        }
    }

    /// Stamp the brush at canvas-local coordinates. Recognition runs
    /// synchronously, but only when the stamp actually changed a cell.
    pub fn paint_at(&mut self, x: f32, y: f32) {
        let changes = paint(&mut self.grid, &self.brush, x, y);
        if !changes.is_empty() {
            self.ranking = recognize(&self.grid, self.network.as_ref());
        }
    }

    /// Wipe the drawing and show the all-zero result state.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.ranking = zero_state();
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::results_panel::draw_results_panel(ctx, self);
        crate::ui::canvas::draw_canvas(ctx, self);
    }
}
