//! Shared analysis pipeline.
//!
//! parameters -> saturation curve -> observations -> reciprocal sample -> fit
//!
//! Everything here is pure computation: no files are touched, so a failure
//! leaves no partial output behind. Rendering and exports consume `RunOutput`
//! afterwards.

use crate::data::observe;
use crate::domain::{FitResult, ReciprocalSample, RunConfig, SaturationCurve};
use crate::error::AppError;
use crate::fit::{fit_sample, reciprocal_sample};
use crate::models::evaluate;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Noise-free model curve.
    pub curve: SaturationCurve,
    /// Velocities the estimator saw (equal to `curve.velocities` without noise).
    pub observed: Vec<f64>,
    pub sample: ReciprocalSample,
    pub fit: FitResult,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_analysis(config: &RunConfig) -> Result<RunOutput, AppError> {
    // 1) Evaluate the rate law on the grid.
    let curve = evaluate(&config.params, config.grid_points)?;
    log::info!(
        "Evaluated saturation curve: Km={} Vmax={} n={}",
        config.params.km,
        config.params.vmax,
        curve.len()
    );

    // 2) Observations (optionally noisy).
    let observed = observe(&curve, &config.noise)?;

    // 3) Reciprocal transform + line fit.
    let sample = reciprocal_sample(&curve.concentrations, &observed)?;
    let fit = fit_sample(&sample)?;

    Ok(RunOutput {
        curve,
        observed,
        sample,
        fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KineticsParameters, NoiseConfig};
    use approx::assert_relative_eq;

    #[test]
    fn reference_run_recovers_vmax() {
        let run = run_analysis(&RunConfig::default()).unwrap();

        assert_eq!(run.curve.len(), 200);
        assert_eq!(run.sample.len(), 199);
        assert_eq!(run.observed, run.curve.velocities);
        assert_relative_eq!(run.fit.vmax_est, 1.0, max_relative = 1e-6);
        assert_relative_eq!(run.fit.km_est, 0.5, max_relative = 1e-6);
    }

    #[test]
    fn invalid_parameters_fail_with_exit_code_2() {
        let config = RunConfig {
            params: KineticsParameters { km: 0.0, vmax: 1.0 },
            ..RunConfig::default()
        };
        assert_eq!(run_analysis(&config).unwrap_err().exit_code(), 2);

        let config = RunConfig {
            grid_points: 1,
            ..RunConfig::default()
        };
        assert_eq!(run_analysis(&config).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn two_point_grid_is_degenerate() {
        // Only one sample survives the S > 0 filter.
        let config = RunConfig {
            grid_points: 2,
            ..RunConfig::default()
        };
        assert_eq!(run_analysis(&config).unwrap_err().exit_code(), 3);
    }

    #[test]
    fn small_noise_still_lands_near_truth() {
        let config = RunConfig {
            noise: NoiseConfig { sd: 0.01, seed: 42 },
            ..RunConfig::default()
        };
        let run = run_analysis(&config).unwrap();

        assert_ne!(run.observed, run.curve.velocities);
        assert_relative_eq!(run.fit.vmax_est, 1.0, max_relative = 0.1);
        assert!(run.fit.quality.r_squared < 1.0);
    }
}
