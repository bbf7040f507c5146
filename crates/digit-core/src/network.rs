//! Trained network loading and the forward pass.
//!
//! The network is an opaque collaborator as far as the rest of the crate is
//! concerned: anything implementing [`Network`] maps a 784-length input to
//! 10 class probabilities. The production implementation is a fully
//! connected sigmoid MLP whose weights are loaded once at startup from a
//! JSON artifact; all shape validation happens at load time so the forward
//! pass itself cannot fail.

use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;

use crate::grid::PIXELS;

/// Number of output classes (digits 0–9).
pub const CLASSES: usize = 10;

/// Forward pass of a pretrained classifier. Implementations are immutable
/// after construction and safe to call repeatedly.
pub trait Network {
    /// Map a length-784 input to length-10 non-negative class scores.
    fn forward(&self, input: ArrayView1<'_, f32>) -> Array1<f32>;
}

/// On-disk artifact: layer sizes plus per-layer weight matrices (row-major,
/// output × input) and bias vectors.
#[derive(Debug, Deserialize)]
struct StoredNetwork {
    sizes: Vec<usize>,
    weights: Vec<Vec<Vec<f32>>>,
    biases: Vec<Vec<f32>>,
}

/// Fully connected feedforward network with sigmoid activations.
#[derive(Debug)]
pub struct MlpNetwork {
    weights: Vec<Array2<f32>>,
    biases: Vec<Array1<f32>>,
}

impl MlpNetwork {
    /// Load and validate a trained network from a JSON weights file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading network file {}", path.display()))?;
        let stored: StoredNetwork = serde_json::from_str(&data)
            .with_context(|| format!("parsing network file {}", path.display()))?;

        let network = Self::from_stored(stored)
            .with_context(|| format!("invalid network in {}", path.display()))?;
        tracing::info!(
            layers = network.weights.len(),
            path = %path.display(),
            "loaded trained network"
        );
        Ok(network)
    }

    fn from_stored(stored: StoredNetwork) -> Result<Self> {
        ensure!(stored.sizes.len() >= 2, "network needs at least two layers");
        ensure!(
            stored.sizes[0] == PIXELS,
            "input layer must have {PIXELS} units, got {}",
            stored.sizes[0]
        );
        ensure!(
            *stored.sizes.last().unwrap() == CLASSES,
            "output layer must have {CLASSES} units, got {}",
            stored.sizes.last().unwrap()
        );
        let layer_count = stored.sizes.len() - 1;
        ensure!(
            stored.weights.len() == layer_count && stored.biases.len() == layer_count,
            "expected {layer_count} weight matrices and bias vectors"
        );

        let mut weights = Vec::with_capacity(layer_count);
        let mut biases = Vec::with_capacity(layer_count);
        for (layer, (w, b)) in stored.weights.into_iter().zip(stored.biases).enumerate() {
            let (rows, cols) = (stored.sizes[layer + 1], stored.sizes[layer]);
            ensure!(
                w.len() == rows && w.iter().all(|row| row.len() == cols),
                "layer {layer}: weight matrix is not {rows}x{cols}"
            );
            ensure!(
                b.len() == rows,
                "layer {layer}: bias vector is not length {rows}"
            );

            let flat: Vec<f32> = w.into_iter().flatten().collect();
            let Ok(matrix) = Array2::from_shape_vec((rows, cols), flat) else {
                bail!("layer {layer}: malformed weight matrix");
            };
            weights.push(matrix);
            biases.push(Array1::from(b));
        }

        Ok(Self { weights, biases })
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

impl Network for MlpNetwork {
    fn forward(&self, input: ArrayView1<'_, f32>) -> Array1<f32> {
        let mut activation = input.to_owned();
        for (w, b) in self.weights.iter().zip(&self.biases) {
            activation = (w.dot(&activation) + b).mapv(sigmoid);
        }
        activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    fn zero_network_json() -> String {
        let weights: Vec<Vec<Vec<f32>>> = vec![vec![vec![0.0; PIXELS]; CLASSES]];
        let biases: Vec<Vec<f32>> = vec![vec![0.0; CLASSES]];
        serde_json::json!({
            "sizes": [PIXELS, CLASSES],
            "weights": weights,
            "biases": biases,
        })
        .to_string()
    }

    #[test]
    fn loads_a_valid_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(zero_network_json().as_bytes()).unwrap();

        let network = MlpNetwork::load(file.path()).unwrap();
        let out = network.forward(Array1::zeros(PIXELS).view());

        assert_eq!(out.len(), CLASSES);
        // All-zero weights and biases: every output is sigmoid(0).
        for &v in &out {
            assert_relative_eq!(v, 0.5);
        }
    }

    #[test]
    fn rejects_wrong_input_width() {
        let stored = StoredNetwork {
            sizes: vec![100, CLASSES],
            weights: vec![vec![vec![0.0; 100]; CLASSES]],
            biases: vec![vec![0.0; CLASSES]],
        };
        let err = MlpNetwork::from_stored(stored).unwrap_err();
        assert!(err.to_string().contains("input layer"));
    }

    #[test]
    fn rejects_mismatched_weight_shape() {
        let stored = StoredNetwork {
            sizes: vec![PIXELS, CLASSES],
            weights: vec![vec![vec![0.0; PIXELS]; CLASSES - 1]],
            biases: vec![vec![0.0; CLASSES]],
        };
        let err = MlpNetwork::from_stored(stored).unwrap_err();
        assert!(err.to_string().contains("weight matrix"));
    }

    #[test]
    fn rejects_missing_layers() {
        let err = MlpNetwork::from_stored(StoredNetwork {
            sizes: vec![PIXELS],
            weights: vec![],
            biases: vec![],
        })
        .unwrap_err();
        assert!(err.to_string().contains("two layers"));
    }

    #[test]
    fn load_fails_on_missing_file() {
        assert!(MlpNetwork::load(Path::new("/nonexistent/net.json")).is_err());
    }

    #[test]
    fn forward_applies_weights_and_biases() {
        // Hidden layer collapses everything; output biases pick digit 3.
        let mut biases = vec![vec![0.0f32; 4], vec![0.0f32; CLASSES]];
        biases[1][3] = 5.0;
        let stored = StoredNetwork {
            sizes: vec![PIXELS, 4, CLASSES],
            weights: vec![vec![vec![0.0; PIXELS]; 4], vec![vec![0.0; 4]; CLASSES]],
            biases,
        };
        let network = MlpNetwork::from_stored(stored).unwrap();
        let out = network.forward(Array1::zeros(PIXELS).view());

        let top = out
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(top, 3);
        assert_relative_eq!(out[3], sigmoid(5.0));
    }
}
