//! Digit Recognition CLI — classifies a digit image with the trained MLP.
//!
//! Usage:
//!   digit-recognize digit.png --model models/digit-mlp.json
//!   digit-recognize scan.png --model models/digit-mlp.json --invert --format json
//!
//! Images are converted to grayscale and resized to 28×28. The MNIST
//! convention is white ink on black; pass --invert for dark-on-light scans.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use image::imageops::FilterType;

use digit_core::grid::{COLS, PixelGrid, ROWS};
use digit_core::network::MlpNetwork;
use digit_core::recognize::recognize;
use digit_core::report::{OutputFormat, print_report};

#[derive(Parser)]
#[command(name = "digit-recognize")]
#[command(about = "MLP-based handwritten digit recognizer")]
struct Cli {
    /// Image file to classify (PNG/JPEG/BMP/GIF)
    image: PathBuf,

    /// Path to the trained network weights (JSON)
    #[arg(short, long, default_value = "models/digit-mlp.json")]
    model: PathBuf,

    /// Treat the image as dark ink on a light background
    #[arg(long)]
    invert: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

/// Decode an image, resize to the grid resolution, and normalize pixels to
/// [0, 1] ink intensities.
fn load_grid(path: &Path, invert: bool) -> Result<PixelGrid> {
    let mut img = image::open(path).with_context(|| format!("opening image {}", path.display()))?;
    if img.width() != COLS as u32 || img.height() != ROWS as u32 {
        img = img.resize_exact(COLS as u32, ROWS as u32, FilterType::Lanczos3);
    }
    let gray = img.to_luma8();

    let mut grid = PixelGrid::new();
    for (col, row, pixel) in gray.enumerate_pixels() {
        let value = f32::from(pixel.0[0]) / 255.0;
        let intensity = if invert { 1.0 - value } else { value };
        grid.set(row as usize, col as usize, intensity);
    }
    Ok(grid)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let network = MlpNetwork::load(&cli.model)
        .with_context(|| format!("loading trained network {}", cli.model.display()))?;

    let grid = load_grid(&cli.image, cli.invert)?;
    if grid.is_empty() {
        tracing::warn!(image = %cli.image.display(), "image is entirely blank");
    }

    let ranking = recognize(&grid, &network);
    print_report(&ranking, cli.format);

    Ok(())
}
