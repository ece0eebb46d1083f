//! Linear demand model evaluation.
//!
//! The fitter and the predictor share two primitive operations:
//! - build a design row for a feature vector (for OLS)
//! - evaluate `intercept + Σ c_j x_j` (for scoring and prediction)

use crate::domain::DemandModel;
use crate::error::PredictionError;

/// Fill a design row for the given features.
///
/// The row includes the constant term first (intercept).
///
/// # Panics
/// Panics if `out` does not have length `features.len() + 1`. Callers should
/// size the row correctly.
pub fn fill_design_row(features: &[f64], out: &mut [f64]) {
    out[0] = 1.0;
    out[1..].copy_from_slice(features);
}

/// Evaluate the linear function for one feature vector of matching dimension.
pub fn evaluate(intercept: f64, coefficients: &[f64], features: &[f64]) -> f64 {
    intercept
        + coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum::<f64>()
}

/// Predict demand for each input row, in input order.
pub fn predict_demand<X: AsRef<[f64]>>(model: &DemandModel, inputs: &[X]) -> Result<Vec<f64>, PredictionError> {
    let expected = model.dimension();
    let mut out = Vec::with_capacity(inputs.len());
    for (row, x) in inputs.iter().enumerate() {
        let x = x.as_ref();
        if x.len() != expected {
            return Err(PredictionError::DimensionMismatch {
                row,
                expected,
                actual: x.len(),
            });
        }
        out.push(evaluate(model.intercept, &model.coefficients, x));
    }
    Ok(out)
}
