//! Recognition pipeline: preprocess, forward pass, confidence ranking.

use ndarray::ArrayView1;
use serde::Serialize;

use crate::grid::PixelGrid;
use crate::network::{CLASSES, Network};
use crate::preprocess::preprocess;

/// One digit with its predicted probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedDigit {
    pub digit: u8,
    pub probability: f32,
}

impl RankedDigit {
    /// Display form, e.g. `9: 90.00%`.
    pub fn display_line(&self) -> String {
        format!("{}: {:.2}%", self.digit, self.probability * 100.0)
    }
}

/// The ranking shown before anything is drawn: digits in natural order,
/// all at zero confidence. Deliberately not sorted, since no inference ran.
pub fn zero_state() -> Vec<RankedDigit> {
    (0..CLASSES as u8)
        .map(|digit| RankedDigit {
            digit,
            probability: 0.0,
        })
        .collect()
}

/// Sort digit indices by descending probability. Ties keep ascending digit
/// order as a consequence of the stable sort; nothing relies on that.
pub fn rank(probabilities: ArrayView1<'_, f32>) -> Vec<RankedDigit> {
    let mut ranking: Vec<RankedDigit> = probabilities
        .iter()
        .take(CLASSES)
        .enumerate()
        .map(|(digit, &probability)| RankedDigit {
            digit: digit as u8,
            probability,
        })
        .collect();
    ranking.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    ranking
}

/// Full pipeline for the current drawing. A blank grid skips inference and
/// yields the zero state.
pub fn recognize(grid: &PixelGrid, network: &dyn Network) -> Vec<RankedDigit> {
    if grid.is_empty() {
        return zero_state();
    }

    let input = preprocess(grid);
    let probabilities = network.forward(input.view());
    let ranking = rank(probabilities.view());
    tracing::debug!(
        prediction = ranking[0].digit,
        confidence = ranking[0].probability,
        "inference complete"
    );
    ranking
}
