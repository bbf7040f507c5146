//! Light sketchpad theme — white paper, gray grid lines, blue accent.

use eframe::egui::{self, Color32, Visuals};

pub const COLOR_PAPER: Color32 = Color32::WHITE;
pub const COLOR_GRID_LINE: Color32 = Color32::from_rgb(221, 221, 221);
pub const COLOR_TOP_GUESS: Color32 = Color32::from_rgb(30, 100, 220);

/// Fill color for a cell holding `intensity` ink: grayscale 255·(1−i).
pub fn ink_color(intensity: f32) -> Color32 {
    let gray = (255.0 * (1.0 - intensity)) as u8;
    Color32::from_gray(gray)
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.override_text_color = Some(Color32::from_rgb(40, 40, 40));
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_color_spans_white_to_black() {
        assert_eq!(ink_color(0.0), Color32::from_gray(255));
        assert_eq!(ink_color(1.0), Color32::from_gray(0));
        assert_eq!(ink_color(0.5), Color32::from_gray(127));
    }
}
