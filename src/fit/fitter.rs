//! Fitting routine for the linear demand model.
//!
//! Given:
//! - lagged feature vectors `x_i = [price_lag, volume_lag]`
//! - labels `y_i` (demand)
//! - a split fraction and an RNG
//!
//! we:
//! - partition the samples into training and held-out subsets
//! - solve OLS for `[intercept, c_price, c_volume]` on the training subset
//! - score R² on the held-out subset
//!
//! The score is diagnostic only; a poor fit is still returned.

use nalgebra::{DMatrix, DVector};
use rand::Rng;

use crate::domain::{DemandModel, FEATURE_DIM, FeatureVector, FitQuality, TrainOptions};
use crate::error::ModelTrainingError;
use crate::fit::split::train_test_split;
use crate::math::{r_squared, solve_least_squares};
use crate::models::{evaluate, fill_design_row};

/// Train a linear demand model on lagged features.
pub fn train_model<R: Rng + ?Sized>(
    features: &[FeatureVector],
    labels: &[f64],
    options: &TrainOptions,
    rng: &mut R,
) -> Result<DemandModel, ModelTrainingError> {
    if features.len() != labels.len() {
        return Err(ModelTrainingError::LengthMismatch {
            features: features.len(),
            labels: labels.len(),
        });
    }
    if let Some(row) = features
        .iter()
        .zip(labels)
        .position(|(x, y)| !(y.is_finite() && x.iter().all(|v| v.is_finite())))
    {
        return Err(ModelTrainingError::NonFiniteInput { row });
    }

    let split = train_test_split(features.len(), options.test_fraction, rng)?;

    let p = FEATURE_DIM + 1;
    let n_train = split.train.len();
    let mut x = DMatrix::<f64>::zeros(n_train, p);
    let mut y = DVector::<f64>::zeros(n_train);
    let mut row = vec![0.0; p];

    for (i, &idx) in split.train.iter().enumerate() {
        fill_design_row(&features[idx], &mut row);
        for (j, v) in row.iter().enumerate() {
            x[(i, j)] = *v;
        }
        y[i] = labels[idx];
    }

    let beta = solve_least_squares(&x, &y).ok_or(ModelTrainingError::SolveFailed { n_train })?;
    let intercept = beta[0];
    let coefficients: Vec<f64> = beta.iter().skip(1).copied().collect();

    let actual: Vec<f64> = split.test.iter().map(|&idx| labels[idx]).collect();
    let predicted: Vec<f64> = split
        .test
        .iter()
        .map(|&idx| evaluate(intercept, &coefficients, &features[idx]))
        .collect();

    Ok(DemandModel {
        intercept,
        coefficients,
        quality: FitQuality {
            n_train,
            n_test: split.test.len(),
            holdout_r2: r_squared(&actual, &predicted),
        },
    })
}
