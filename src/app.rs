//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initialises logging
//! - parses CLI arguments into a `RunConfig`
//! - runs evaluation + fit
//! - renders charts and writes optional exports
//! - prints the answer line

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{KineticsParameters, NoiseConfig, RunConfig};
use crate::error::AppError;
use crate::plot::{ChartRenderer, PlotConfig, PngRenderer};

pub mod pipeline;

/// Entry point for the `mmk` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = run_config_from_args(&cli);
    let renderer = PngRenderer::new(
        PlotConfig {
            width: config.plot_width,
            height: config.plot_height,
            ..PlotConfig::default()
        },
        config.font.clone(),
    );

    let answer = execute(&config, &renderer)?;
    println!("{answer}");
    Ok(())
}

/// Run the pipeline and all side effects; returns the text for stdout.
///
/// Computation finishes before anything is written, so a parameter or fit
/// failure produces no files and no answer.
pub fn execute(config: &RunConfig, renderer: &dyn ChartRenderer) -> Result<String, AppError> {
    let run = pipeline::run_analysis(config)?;

    if config.plot {
        crate::plot::write_charts(renderer, &run, &config.output_dir)?;
    }

    // Optional exports.
    if let Some(path) = &config.export_fit {
        crate::io::write_fit_json(path, &run, config)?;
    }
    if let Some(path) = &config.export_curve {
        crate::io::write_curve_csv(path, &run)?;
    }

    let mut out = String::new();
    if config.summary {
        out.push_str(&crate::report::format_run_summary(&run, config));
        out.push('\n');
    }
    out.push_str(&crate::report::format_answer(run.fit.vmax_est));
    Ok(out)
}

/// Translate CLI flags into a run configuration.
///
/// Values are not validated here; the pipeline rejects them with the proper
/// error kind.
pub fn run_config_from_args(args: &Cli) -> RunConfig {
    RunConfig {
        params: KineticsParameters {
            km: args.km,
            vmax: args.vmax,
        },
        grid_points: args.points,
        noise: NoiseConfig {
            sd: args.noise,
            seed: args.seed,
        },
        output_dir: args.output_dir.clone(),
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        font: args.font.clone(),
        summary: args.summary,
        export_fit: args.export_fit.clone(),
        export_curve: args.export_curve.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::{Path, PathBuf};

    use crate::domain::{LINEWEAVER_BURK_PLOT_FILE, SATURATION_PLOT_FILE};
    use crate::plot::ChartSpec;

    /// Counts render calls and creates empty placeholder files.
    #[derive(Default)]
    struct TouchRenderer {
        calls: Cell<usize>,
    }

    impl ChartRenderer for TouchRenderer {
        fn render(&self, _chart: &ChartSpec, path: &Path) -> Result<(), AppError> {
            self.calls.set(self.calls.get() + 1);
            std::fs::write(path, b"").map_err(|e| AppError::output(e.to_string()))
        }
    }

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["mmk"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_reference_run() {
        let config = run_config_from_args(&parse(&[]));

        assert_eq!(config.params, KineticsParameters { km: 0.5, vmax: 1.0 });
        assert_eq!(config.grid_points, 200);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.plot);
        assert!(!config.noise.is_enabled());
    }

    #[test]
    fn negative_values_reach_validation() {
        let config = run_config_from_args(&parse(&["--km", "-1", "--no-plot"]));
        assert_eq!(config.params.km, -1.0);
        assert!(!config.plot);

        let err = execute(&config, &TouchRenderer::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn successful_run_writes_charts_and_answer() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            output_dir: dir.path().to_path_buf(),
            ..RunConfig::default()
        };
        let renderer = TouchRenderer::default();

        let out = execute(&config, &renderer).unwrap();

        assert_eq!(renderer.calls.get(), 2);
        for name in [SATURATION_PLOT_FILE, LINEWEAVER_BURK_PLOT_FILE] {
            let path = dir.path().join(name);
            assert!(path.is_file(), "missing {}", path.display());
        }
        assert!(out.starts_with("Answer: "));
        let vmax: f64 = out.trim_start_matches("Answer: ").parse().unwrap();
        assert!((vmax - 1.0).abs() < 1e-9);
    }

    #[test]
    fn failure_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            params: KineticsParameters { km: 0.5, vmax: 0.0 },
            output_dir: dir.path().to_path_buf(),
            export_fit: Some(dir.path().join("fit.json")),
            export_curve: Some(dir.path().join("curve.csv")),
            ..RunConfig::default()
        };
        let renderer = TouchRenderer::default();

        let err = execute(&config, &renderer).unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert_eq!(renderer.calls.get(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn summary_precedes_answer() {
        let config = RunConfig {
            plot: false,
            summary: true,
            ..RunConfig::default()
        };
        let out = execute(&config, &TouchRenderer::default()).unwrap();

        assert!(out.starts_with("=== mmk"));
        assert!(out.lines().last().unwrap().starts_with("Answer: "));
    }
}
