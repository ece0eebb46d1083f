//! Reporting utilities: fitted values, label counts, and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{DemandModel, LaggedDataset, TrendLabel, TrendLabels};
use crate::error::PredictionError;
use crate::models::predict_demand;

/// Model predictions for every pair in the dataset, aligned with `dataset.labels`.
pub fn fitted_values(model: &DemandModel, dataset: &LaggedDataset) -> Result<Vec<f64>, PredictionError> {
    predict_demand(model, &dataset.features)
}

/// Count labels per regime, in `TrendLabel::ALL` order.
pub fn label_counts(labels: &TrendLabels) -> Vec<(TrendLabel, usize)> {
    TrendLabel::ALL
        .iter()
        .map(|&kind| (kind, labels.values().filter(|l| **l == kind).count()))
        .collect()
}
