//! Command-line parsing for the kinetics demo.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! modeling/math code. Every flag has an environment fallback so a `.env`
//! file can pin a configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{DEFAULT_GRID_POINTS, DEFAULT_KM, DEFAULT_VMAX};

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mmk",
    version,
    about = "Michaelis-Menten saturation curve and Lineweaver-Burk parameter recovery"
)]
pub struct Cli {
    /// Michaelis constant Km (> 0).
    #[arg(long, env = "MMK_KM", allow_negative_numbers = true, default_value_t = DEFAULT_KM)]
    pub km: f64,

    /// Maximum velocity Vmax (> 0).
    #[arg(long, env = "MMK_VMAX", allow_negative_numbers = true, default_value_t = DEFAULT_VMAX)]
    pub vmax: f64,

    /// Number of concentration samples over [0, 10·Km] (>= 2).
    #[arg(short = 'n', long, env = "MMK_POINTS", default_value_t = DEFAULT_GRID_POINTS)]
    pub points: usize,

    /// Log-normal noise on observed velocities (standard deviation, 0 disables).
    #[arg(long, env = "MMK_NOISE", allow_negative_numbers = true, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed for the noise.
    #[arg(long, env = "MMK_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Directory for the chart images.
    #[arg(short = 'o', long, env = "MMK_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip writing the chart images.
    #[arg(long)]
    pub no_plot: bool,

    /// Image width (pixels).
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height (pixels).
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// TrueType font for chart text (system fonts are searched otherwise).
    #[arg(long, env = "MMK_FONT", value_name = "TTF")]
    pub font: Option<PathBuf>,

    /// Print a run summary before the answer line.
    #[arg(long)]
    pub summary: bool,

    /// Export parameters, fit, and diagnostics to JSON.
    #[arg(long = "export-fit", value_name = "JSON")]
    pub export_fit: Option<PathBuf>,

    /// Export the evaluated curve to CSV.
    #[arg(long = "export-curve", value_name = "CSV")]
    pub export_curve: Option<PathBuf>,
}
