//! Right panel: Clear button and the ranked confidence list.

use eframe::egui;

use crate::app::SketchApp;
use crate::ui::theme;

pub fn draw_results_panel(ctx: &egui::Context, app: &mut SketchApp) {
    egui::SidePanel::right("results_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("DIGIT SKETCHPAD");
                ui.small(&app.model_name);
                ui.separator();

                if ui
                    .add_sized([ui.available_width(), 28.0], egui::Button::new("Clear"))
                    .clicked()
                {
                    app.clear();
                }

                ui.add_space(4.0);
                ui.separator();

                // Blank grid shows the unsorted all-zero list; otherwise the
                // top guess is ranked first and accented.
                let any_ink = !app.grid.is_empty();
                for (i, entry) in app.ranking.iter().enumerate() {
                    if any_ink && i == 0 {
                        ui.colored_label(
                            theme::COLOR_TOP_GUESS,
                            egui::RichText::new(entry.display_line()).monospace(),
                        );
                    } else {
                        ui.monospace(entry.display_line());
                    }
                }
            });
        });
}
