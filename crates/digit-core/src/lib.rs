//! digit-core — shared library for handwritten-digit recognition.
//!
//! Provides the drawing grid, brush rasterization, MNIST-style
//! preprocessing, MLP inference, and result ranking used by both the
//! GUI and CLI frontends.

pub mod brush;
pub mod grid;
pub mod network;
pub mod preprocess;
pub mod recognize;
pub mod report;
