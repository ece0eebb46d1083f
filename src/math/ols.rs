//! Ordinary least squares solver.
//!
//! The demand model is a small linear regression:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! with `x_i = [1, price_lag, volume_lag]`.
//!
//! Implementation choices:
//! - We solve via SVD so tall systems (more rows than columns) are handled and
//!   underdetermined ones (tiny training splits) get the minimum-norm solution.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - The parameter dimension is 3, so SVD cost is negligible.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    if x.nrows() == 0 || x.nrows() != y.len() {
        return None;
    }

    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
