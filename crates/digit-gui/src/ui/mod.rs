pub mod canvas;
pub mod results_panel;
pub mod theme;
