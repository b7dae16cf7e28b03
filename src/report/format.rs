//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::RunOutput;
use crate::domain::RunConfig;
use crate::report::recovery_error;

/// The headline result line: `Answer: <Vmax estimate>`.
///
/// `{:?}` keeps a decimal point on integral values (`1.0`, not `1`) while still
/// printing the shortest round-trip representation. Exponents are written
/// signed with at least two digits (`1e-07`, `1.5e+20`).
pub fn format_answer(vmax_est: f64) -> String {
    format!("Answer: {}", fmt_shortest(vmax_est))
}

fn fmt_shortest(v: f64) -> String {
    let s = format!("{v:?}");
    let Some((mantissa, exp)) = s.split_once('e') else {
        return s;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Format the full run summary (parameters, grid, fit, quality, recovery).
pub fn format_run_summary(run: &RunOutput, config: &RunConfig) -> String {
    let mut out = String::new();
    let params = &run.curve.params;
    let fit = &run.fit;

    out.push_str("=== mmk - Michaelis-Menten kinetics ===\n");
    out.push_str(&format!("Parameters: Km={} | Vmax={}\n", params.km, params.vmax));

    let s_max = run.curve.concentrations.last().copied().unwrap_or(0.0);
    let v_max = run.curve.velocities.last().copied().unwrap_or(0.0);
    out.push_str(&format!(
        "Grid: n={} | S=[0, {:.4}] | v(S_max)={:.6}\n",
        run.curve.len(),
        s_max,
        v_max
    ));

    if config.noise.is_enabled() {
        out.push_str(&format!(
            "Noise: log-normal sd={} seed={}\n",
            config.noise.sd, config.noise.seed
        ));
    } else {
        out.push_str("Noise: none\n");
    }

    out.push_str("\nLineweaver-Burk fit (1/v = slope·1/S + intercept):\n");
    out.push_str(&format!("- samples  : {} (S > 0)\n", run.sample.len()));
    out.push_str(&format!("- slope    : {:.10}\n", fit.slope));
    out.push_str(&format!("- intercept: {:.10}\n", fit.intercept));
    out.push_str(&format!(
        "- SSE={:.3e} RMSE={:.3e} R²={:.8}\n",
        fit.quality.sse, fit.quality.rmse, fit.quality.r_squared
    ));

    let err = recovery_error(params, fit);
    out.push_str("\nEstimates:\n");
    out.push_str(&format!(
        "- Vmax_est = {:.10} (rel. error {:.2e})\n",
        fit.vmax_est, err.vmax_rel
    ));
    out.push_str(&format!(
        "- Km_est   = {:.10} (rel. error {:.2e})\n",
        fit.km_est, err.km_rel
    ));

    out
}
