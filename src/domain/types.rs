//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during evaluation and fitting
//! - exported to JSON/CSV
//! - handed to the chart renderer as plain data

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::KineticsError;

/// Michaelis constant of the reference run.
pub const DEFAULT_KM: f64 = 0.5;

/// Maximum velocity of the reference run.
pub const DEFAULT_VMAX: f64 = 1.0;

/// Number of concentration samples in the reference run.
pub const DEFAULT_GRID_POINTS: usize = 200;

/// The concentration grid spans `[0, GRID_SPAN_KM * Km]`.
pub const GRID_SPAN_KM: f64 = 10.0;

/// Saturation-curve image name.
pub const SATURATION_PLOT_FILE: &str = "velocity_vs_substrate.png";

/// Double-reciprocal fit image name.
pub const LINEWEAVER_BURK_PLOT_FILE: &str = "lineweaver_burk.png";

/// Rate-law parameters, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticsParameters {
    /// Half-saturation constant.
    pub km: f64,
    /// Maximum velocity (asymptote of the saturation curve).
    pub vmax: f64,
}

impl KineticsParameters {
    pub fn new(km: f64, vmax: f64) -> Result<Self, KineticsError> {
        let params = Self { km, vmax };
        params.validate()?;
        Ok(params)
    }

    /// Both parameters must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), KineticsError> {
        if !(self.km.is_finite() && self.km > 0.0) {
            return Err(KineticsError::invalid(format!("Km must be a finite value > 0 (got {}).", self.km)));
        }
        if !(self.vmax.is_finite() && self.vmax > 0.0) {
            return Err(KineticsError::invalid(format!(
                "Vmax must be a finite value > 0 (got {}).",
                self.vmax
            )));
        }
        Ok(())
    }
}

impl Default for KineticsParameters {
    fn default() -> Self {
        Self {
            km: DEFAULT_KM,
            vmax: DEFAULT_VMAX,
        }
    }
}

/// Evaluated saturation curve.
///
/// `concentrations` is the uniform grid over `[0, 10·Km]` (strictly increasing,
/// first element exactly 0). `velocities` is the rate law evaluated at each grid
/// point, index for index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationCurve {
    pub params: KineticsParameters,
    pub concentrations: Vec<f64>,
    pub velocities: Vec<f64>,
}

impl SaturationCurve {
    pub fn len(&self) -> usize {
        self.concentrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concentrations.is_empty()
    }

    /// `(S, v)` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.concentrations.iter().copied().zip(self.velocities.iter().copied())
    }
}

/// Double-reciprocal sample `(1/S, 1/v)`, restricted to `S > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReciprocalSample {
    pub inv_s: Vec<f64>,
    pub inv_v: Vec<f64>,
}

impl ReciprocalSample {
    pub fn len(&self) -> usize {
        self.inv_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inv_s.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.inv_s.iter().copied().zip(self.inv_v.iter().copied())
    }

    /// Smallest and largest `1/S`, or `None` for an empty sample.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &x in &self.inv_s {
            lo = lo.min(x);
            hi = hi.max(x);
        }
        (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
    }
}

/// Goodness-of-fit diagnostics on the reciprocal sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub r_squared: f64,
    pub n: usize,
}

/// Straight-line fit of `1/v` against `1/S`, back-transformed to kinetic parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    /// `1 / intercept`
    pub vmax_est: f64,
    /// `slope · vmax_est`
    pub km_est: f64,
    pub quality: FitQuality,
}

impl FitResult {
    /// Fitted `1/v` at the given `1/S`.
    pub fn predict(&self, inv_s: f64) -> f64 {
        self.slope * inv_s + self.intercept
    }
}

/// Simulated measurement noise applied to the velocities before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Log-scale standard deviation; `0.0` disables noise.
    pub sd: f64,
    pub seed: u64,
}

impl NoiseConfig {
    pub fn is_enabled(&self) -> bool {
        self.sd > 0.0
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self { sd: 0.0, seed: 42 }
    }
}

/// Everything a single run needs.
///
/// Built from CLI flags / environment (see `app::run_config_from_args`); the
/// default reproduces the reference run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub params: KineticsParameters,
    pub grid_points: usize,
    pub noise: NoiseConfig,

    pub output_dir: PathBuf,
    pub plot: bool,
    pub plot_width: u32,
    pub plot_height: u32,
    pub font: Option<PathBuf>,

    pub summary: bool,
    pub export_fit: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            params: KineticsParameters::default(),
            grid_points: DEFAULT_GRID_POINTS,
            noise: NoiseConfig::default(),
            output_dir: PathBuf::from("."),
            plot: true,
            plot_width: 640,
            plot_height: 480,
            font: None,
            summary: false,
            export_fit: None,
            export_curve: None,
        }
    }
}
