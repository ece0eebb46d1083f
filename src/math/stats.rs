//! Descriptive statistics used by fitting and trend classification.

/// Simple moving average over `window` values.
///
/// Position `i` holds the mean of `values[i + 1 - window ..= i]` once that many
/// values are available, and `None` before. A zero window yields all `None`.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    // Each window is summed from scratch: equal windows give bit-equal averages.
    for i in (window - 1)..values.len() {
        let sum: f64 = values[i + 1 - window..=i].iter().sum();
        out[i] = Some(sum / window as f64);
    }
    out
}

/// Coefficient of determination of `predicted` against `actual`.
///
/// Returns `None` for fewer than two samples or mismatched lengths. When
/// `actual` has zero variance, a perfect fit scores 1.0 and anything else 0.0.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    if actual.len() < 2 || actual.len() != predicted.len() {
        return None;
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        return Some(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Some(1.0 - ss_res / ss_tot)
}

/// Round to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
