//! Michaelis-Menten rate law and saturation-curve evaluation.
//!
//! `v(S) = Vmax·S / (Km + S)`
//!
//! With `Km > 0` and `S >= 0` the denominator is strictly positive, so
//! evaluation never divides by zero and `v(0)` is exactly `0`.

use crate::domain::{GRID_SPAN_KM, KineticsParameters, SaturationCurve};
use crate::error::KineticsError;
use crate::math::linspace;

/// Reaction velocity at substrate concentration `s`.
pub fn velocity(s: f64, params: &KineticsParameters) -> f64 {
    (params.vmax * s) / (params.km + s)
}

/// Uniform concentration grid over `[0, 10·Km]` with `num_points` samples.
pub fn concentration_grid(params: &KineticsParameters, num_points: usize) -> Result<Vec<f64>, KineticsError> {
    params.validate()?;
    if num_points < 2 {
        return Err(KineticsError::invalid(format!(
            "Grid needs at least 2 points (got {num_points})."
        )));
    }

    let upper = GRID_SPAN_KM * params.km;
    if !upper.is_finite() {
        return Err(KineticsError::invalid(format!(
            "Grid upper bound 10·Km overflows (Km = {}).",
            params.km
        )));
    }

    Ok(linspace(0.0, upper, num_points))
}

/// Evaluate the saturation curve on the standard grid.
pub fn evaluate(params: &KineticsParameters, num_points: usize) -> Result<SaturationCurve, KineticsError> {
    let concentrations = concentration_grid(params, num_points)?;
    let velocities = concentrations.iter().map(|&s| velocity(s, params)).collect();

    Ok(SaturationCurve {
        params: *params,
        concentrations,
        velocities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PARAM_SETS: [(f64, f64); 5] = [(0.5, 1.0), (1e-3, 2.0), (3.0, 0.25), (100.0, 10.0), (0.07, 1e4)];

    #[test]
    fn reference_run_values() {
        let params = KineticsParameters::new(0.5, 1.0).unwrap();
        let curve = evaluate(&params, 200).unwrap();

        assert_eq!(curve.len(), 200);
        assert_eq!(curve.concentrations[0], 0.0);
        assert_eq!(curve.concentrations[199], 5.0);
        assert_eq!(curve.velocities[0], 0.0);
        assert_relative_eq!(curve.velocities[199], 5.0 / 5.5, max_relative = 1e-12);
    }

    #[test]
    fn grid_spans_ten_km_and_strictly_increases() {
        for (km, vmax) in PARAM_SETS {
            let params = KineticsParameters::new(km, vmax).unwrap();
            for n in [2, 3, 17, 200] {
                let grid = concentration_grid(&params, n).unwrap();
                assert_eq!(grid.len(), n);
                assert_eq!(grid[0], 0.0);
                assert_eq!(grid[n - 1], 10.0 * km);
                assert!(grid.windows(2).all(|w| w[1] > w[0]), "grid not increasing for km={km}, n={n}");
            }
        }
    }

    #[test]
    fn velocity_is_zero_at_origin_monotone_and_bounded() {
        for (km, vmax) in PARAM_SETS {
            let params = KineticsParameters::new(km, vmax).unwrap();
            let curve = evaluate(&params, 200).unwrap();

            assert_eq!(curve.velocities[0], 0.0);
            assert!(curve.velocities.windows(2).all(|w| w[1] >= w[0]));
            for &v in &curve.velocities {
                assert!(v <= vmax * (1.0 + 1e-12), "v={v} exceeds vmax={vmax}");
            }
        }
    }

    #[test]
    fn half_saturation_at_km() {
        let params = KineticsParameters::new(2.0, 8.0).unwrap();
        assert_relative_eq!(velocity(2.0, &params), 4.0, max_relative = 1e-15);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let zero_km = KineticsParameters { km: 0.0, vmax: 1.0 };
        let zero_vmax = KineticsParameters { km: 0.5, vmax: 0.0 };
        let ok = KineticsParameters::default();

        assert!(matches!(evaluate(&zero_km, 200), Err(KineticsError::InvalidParameter(_))));
        assert!(matches!(evaluate(&zero_vmax, 200), Err(KineticsError::InvalidParameter(_))));
        assert!(matches!(evaluate(&ok, 1), Err(KineticsError::InvalidParameter(_))));
        assert!(matches!(evaluate(&ok, 0), Err(KineticsError::InvalidParameter(_))));

        let huge = KineticsParameters { km: f64::MAX, vmax: 1.0 };
        assert!(matches!(evaluate(&huge, 10), Err(KineticsError::InvalidParameter(_))));
    }
}
