//! Write fit JSON files.
//!
//! Fit JSON is the "portable" record of a run:
//! - the true parameters and grid size
//! - noise settings
//! - the fitted line, back-transformed estimates, and quality diagnostics

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::pipeline::RunOutput;
use crate::domain::{FitResult, KineticsParameters, NoiseConfig, RunConfig};
use crate::error::AppError;

/// On-disk schema of `--export-fit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub parameters: KineticsParameters,
    pub grid_points: usize,
    pub noise: NoiseConfig,
    pub reciprocal_samples: usize,
    pub fit: FitResult,
}

impl FitFile {
    pub fn from_run(run: &RunOutput, config: &RunConfig) -> Self {
        Self {
            tool: "mmk".to_string(),
            generated_at: Utc::now(),
            parameters: run.curve.params,
            grid_points: run.curve.len(),
            noise: config.noise,
            reciprocal_samples: run.sample.len(),
            fit: run.fit.clone(),
        }
    }
}

/// Write a fit JSON file.
pub fn write_fit_json(path: &Path, run: &RunOutput, config: &RunConfig) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create fit JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &FitFile::from_run(run, config))
        .map_err(|e| AppError::output(format!("Failed to write fit JSON: {e}")))?;

    log::info!("Wrote fit JSON to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_analysis;
    use approx::assert_relative_eq;

    #[test]
    fn fit_json_records_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fit.json");
        let config = RunConfig::default();
        let run = run_analysis(&config).unwrap();

        write_fit_json(&path, &run, &config).unwrap();

        let file = File::open(&path).unwrap();
        let loaded: FitFile = serde_json::from_reader(file).unwrap();
        assert_eq!(loaded.tool, "mmk");
        assert_eq!(loaded.grid_points, 200);
        assert_eq!(loaded.reciprocal_samples, 199);
        assert_eq!(loaded.parameters, config.params);
        assert_relative_eq!(loaded.fit.vmax_est, run.fit.vmax_est);
    }
}
