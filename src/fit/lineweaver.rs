//! Lineweaver-Burk estimation.
//!
//! Taking reciprocals of the rate law gives a straight line:
//!
//! ```text
//! 1/v = (Km/Vmax)·(1/S) + 1/Vmax
//! ```
//!
//! so an OLS fit of `1/v` on `1/S` yields `slope = Km/Vmax` and
//! `intercept = 1/Vmax`, which we back-transform into estimates.

use crate::domain::{FitQuality, FitResult, ReciprocalSample};
use crate::error::KineticsError;
use crate::fit::reciprocal::{MIN_FIT_SAMPLES, reciprocal_sample};
use crate::math::{LineFit, fit_line, linspace};

/// Filter, transform, and fit a concentration/velocity series.
pub fn fit_reciprocal(concentrations: &[f64], velocities: &[f64]) -> Result<FitResult, KineticsError> {
    let sample = reciprocal_sample(concentrations, velocities)?;
    fit_sample(&sample)
}

/// Fit an already transformed reciprocal sample.
pub fn fit_sample(sample: &ReciprocalSample) -> Result<FitResult, KineticsError> {
    if sample.len() < MIN_FIT_SAMPLES || sample.inv_s.len() != sample.inv_v.len() {
        return Err(KineticsError::degenerate(format!(
            "Need at least {MIN_FIT_SAMPLES} paired reciprocal samples (got {} x, {} y).",
            sample.inv_s.len(),
            sample.inv_v.len()
        )));
    }

    let line = fit_line(&sample.inv_s, &sample.inv_v).ok_or_else(|| {
        KineticsError::degenerate("Regression system is singular (1/S values identical, non-finite, or rank deficient).")
    })?;
    let (vmax_est, km_est) = back_transform(&line)?;
    let quality = fit_quality(sample, &line);

    log::info!(
        "Lineweaver-Burk fit: slope={:.6} intercept={:.6} -> Vmax={:.6} Km={:.6} (R²={:.6})",
        line.slope,
        line.intercept,
        vmax_est,
        km_est,
        quality.r_squared
    );

    Ok(FitResult {
        slope: line.slope,
        intercept: line.intercept,
        vmax_est,
        km_est,
        quality,
    })
}

/// Turn a fitted line into `(Vmax, Km)`.
pub fn back_transform(line: &LineFit) -> Result<(f64, f64), KineticsError> {
    if line.intercept == 0.0 {
        return Err(KineticsError::degenerate("Fitted intercept is exactly 0; Vmax = 1/intercept is undefined."));
    }

    let vmax_est = 1.0 / line.intercept;
    let km_est = line.slope * vmax_est;
    if !(vmax_est.is_finite() && km_est.is_finite()) {
        return Err(KineticsError::degenerate(format!(
            "Back-transformed estimates are not finite (Vmax = {vmax_est}, Km = {km_est})."
        )));
    }

    Ok((vmax_est, km_est))
}

fn fit_quality(sample: &ReciprocalSample, line: &LineFit) -> FitQuality {
    let n = sample.len();
    let mean = sample.inv_v.iter().sum::<f64>() / n as f64;

    let mut sse = 0.0;
    let mut sst = 0.0;
    for (x, y) in sample.points() {
        let r = y - (line.slope * x + line.intercept);
        sse += r * r;
        sst += (y - mean) * (y - mean);
    }

    let rmse = (sse / n as f64).sqrt();
    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 1.0 };

    FitQuality { sse, rmse, r_squared, n }
}

/// `n` points of the fitted line spanning the sample's `1/S` range.
pub fn fitted_line(fit: &FitResult, sample: &ReciprocalSample, n: usize) -> Vec<(f64, f64)> {
    let Some((lo, hi)) = sample.x_range() else {
        return Vec::new();
    };
    linspace(lo, hi, n).into_iter().map(|x| (x, fit.predict(x))).collect()
}
