//! Central panel: the 28×28 drawing canvas.

use digit_core::grid::{COLS, ROWS};
use eframe::egui::{self, Pos2, Rect, Sense, Stroke, Vec2};

use crate::app::SketchApp;
use crate::ui::theme;

/// On-screen size of one grid cell, in points.
pub const CELL_SIZE: f32 = 10.0;

pub fn draw_canvas(ctx: &egui::Context, app: &mut SketchApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = Vec2::new(COLS as f32 * CELL_SIZE, ROWS as f32 * CELL_SIZE);
        let (rect, response) = ui.allocate_exact_size(canvas_size, Sense::click_and_drag());

        if response.is_pointer_button_down_on() {
            app.drawing = true;
        }
        if response.drag_stopped() {
            app.drawing = false;
        }

        // Paint while the stroke is live; the brush takes canvas-local
        // pixel coordinates.
        if app.drawing {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                app.paint_at(local.x, local.y);
            }
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, theme::COLOR_PAPER);

        for row in 0..ROWS {
            for col in 0..COLS {
                let min = Pos2::new(
                    rect.min.x + col as f32 * CELL_SIZE,
                    rect.min.y + row as f32 * CELL_SIZE,
                );
                let cell = Rect::from_min_size(min, Vec2::splat(CELL_SIZE));

                let intensity = app.grid.get(row, col);
                if intensity > 0.0 {
                    painter.rect_filled(cell, 0.0, theme::ink_color(intensity));
                }
                painter.rect_stroke(cell, 0.0, Stroke::new(1.0, theme::COLOR_GRID_LINE));
            }
        }
    });
}
