//! Reporting utilities: parameter recovery and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{FitResult, KineticsParameters};

/// Relative error of the fitted estimates against the true parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryError {
    pub vmax_rel: f64,
    pub km_rel: f64,
}

/// Compare the back-transformed estimates with the parameters the curve was built from.
pub fn recovery_error(params: &KineticsParameters, fit: &FitResult) -> RecoveryError {
    RecoveryError {
        vmax_rel: (fit.vmax_est - params.vmax).abs() / params.vmax,
        km_rel: (fit.km_est - params.km).abs() / params.km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitQuality;

    #[test]
    fn recovery_error_is_relative() {
        let params = KineticsParameters { km: 0.5, vmax: 2.0 };
        let fit = FitResult {
            slope: 0.25,
            intercept: 0.4,
            vmax_est: 2.5,
            km_est: 0.625,
            quality: FitQuality {
                sse: 0.0,
                rmse: 0.0,
                r_squared: 1.0,
                n: 10,
            },
        };

        let err = recovery_error(&params, &fit);
        assert!((err.vmax_rel - 0.25).abs() < 1e-12);
        assert!((err.km_rel - 0.25).abs() < 1e-12);
    }
}
