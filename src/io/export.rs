//! Export the evaluated curve to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::error::AppError;

/// Write `concentration,velocity,observed_velocity` rows, one per grid point.
pub fn write_curve_csv(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create curve CSV '{}': {e}", path.display())))?;
    let mut file = BufWriter::new(file);

    writeln!(file, "concentration,velocity,observed_velocity")
        .map_err(|e| AppError::output(format!("Failed to write curve CSV header: {e}")))?;

    for ((s, v), obs) in run.curve.points().zip(&run.observed) {
        writeln!(file, "{s:.12},{v:.12},{obs:.12}")
            .map_err(|e| AppError::output(format!("Failed to write curve CSV row: {e}")))?;
    }

    file.flush()
        .map_err(|e| AppError::output(format!("Failed to flush curve CSV '{}': {e}", path.display())))?;

    log::info!("Wrote curve CSV to {}", path.display());
    Ok(())
}
