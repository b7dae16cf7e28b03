//! Ordinary least squares.
//!
//! The estimator fits a single straight line:
//!
//! ```text
//! minimize Σ (y_i - (slope·x_i + intercept))^2
//! ```
//!
//! Implementation choices:
//! - The design matrix is `[1, x_i]` per row and is solved via SVD, which stays
//!   well behaved for tall systems (many more rows than columns).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - `x` is centred and scaled to `[-1, 1]` before solving, so the conditioning
//!   does not depend on the magnitude of the inputs (1/S can be ~1e-15).
//! - A constant `x` column makes the system singular. We detect that up front,
//!   and any singular value under the relative tolerance is rejected rather
//!   than truncated into a minimum-norm solution.

use nalgebra::{DMatrix, DVector};

/// Slope and intercept of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the matrix is rank deficient relative to
/// `eps · σ_max · max(rows, cols)`.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    let sigma_max = svd.singular_values.iter().copied().fold(0.0, f64::max);
    if !(sigma_max > 0.0 && sigma_max.is_finite()) {
        return None;
    }
    let tol = f64::EPSILON * sigma_max * x.nrows().max(x.ncols()) as f64;
    if svd.singular_values.iter().any(|&s| s <= tol) {
        return None;
    }

    let beta = svd.solve(y, tol).ok()?;
    beta.iter().all(|v| v.is_finite()).then_some(beta)
}

/// Fit `y = slope·x + intercept`.
///
/// Returns `None` when the inputs differ in length, hold fewer than two points,
/// contain non-finite values, or when every `x` is identical.
pub fn fit_line(x: &[f64], y: &[f64]) -> Option<LineFit> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    if !x.iter().chain(y.iter()).all(|v| v.is_finite()) {
        return None;
    }
    if x.iter().all(|&v| v == x[0]) {
        return None;
    }

    let n = x.len();
    let center = x.iter().sum::<f64>() / n as f64;
    let scale = x.iter().map(|v| (v - center).abs()).fold(0.0, f64::max);
    if !(center.is_finite() && scale > 0.0 && scale.is_finite()) {
        return None;
    }

    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { (x[i] - center) / scale });
    let target = DVector::from_column_slice(y);
    let beta = solve_least_squares(&design, &target)?;

    // Undo the centring: y = b0 + b1·(x - c)/s.
    let slope = beta[1] / scale;
    let intercept = beta[0] - slope * center;
    (slope.is_finite() && intercept.is_finite()).then_some(LineFit { slope, intercept })
}
