//! Digit Sketchpad GUI — eframe/egui desktop application.

mod app;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use digit_core::network::MlpNetwork;

use app::SketchApp;

#[derive(Parser)]
#[command(name = "digit-sketchpad")]
#[command(about = "Draw a digit and watch a pretrained network guess it")]
struct Cli {
    /// Path to the trained network weights (JSON)
    #[arg(short, long, default_value = "models/digit-mlp.json")]
    model: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // The network is the one thing the application cannot run without;
    // load it before the event loop and fail loudly.
    let network = match MlpNetwork::load(&cli.model)
        .with_context(|| format!("loading trained network {}", cli.model.display()))
    {
        Ok(network) => network,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(model = %cli.model.display(), "starting sketchpad");

    let model_name = cli
        .model
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| cli.model.display().to_string());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Digit Recognition")
            .with_inner_size([480.0, 330.0])
            .with_min_inner_size([480.0, 330.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Digit Recognition",
        options,
        Box::new(move |cc| {
            ui::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(SketchApp::new(Box::new(network), model_name)))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
