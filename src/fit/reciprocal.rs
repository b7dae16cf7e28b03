//! Double-reciprocal transform.
//!
//! Every sample with `S <= 0` is dropped (not only the first grid point), then
//! `(1/S, 1/v)` is formed for the rest. A kept sample whose velocity is zero or
//! non-finite has no usable reciprocal and fails the whole transform.

use crate::domain::ReciprocalSample;
use crate::error::KineticsError;

/// Minimum number of usable samples for a line fit.
pub const MIN_FIT_SAMPLES: usize = 2;

/// Build the reciprocal sample from paired concentration/velocity series.
pub fn reciprocal_sample(concentrations: &[f64], velocities: &[f64]) -> Result<ReciprocalSample, KineticsError> {
    if concentrations.len() != velocities.len() {
        return Err(KineticsError::degenerate(format!(
            "Concentration and velocity series differ in length ({} vs {}).",
            concentrations.len(),
            velocities.len()
        )));
    }

    let mut inv_s = Vec::with_capacity(concentrations.len());
    let mut inv_v = Vec::with_capacity(velocities.len());

    for (i, (&s, &v)) in concentrations.iter().zip(velocities).enumerate() {
        if s.is_nan() {
            return Err(KineticsError::degenerate(format!("Concentration at index {i} is NaN.")));
        }
        if s <= 0.0 {
            continue;
        }
        if s.is_infinite() {
            return Err(KineticsError::degenerate(format!("Concentration at index {i} is infinite.")));
        }
        if v == 0.0 || !v.is_finite() {
            return Err(KineticsError::degenerate(format!(
                "Velocity at index {i} (S = {s}) is {v}; its reciprocal is undefined."
            )));
        }
        inv_s.push(1.0 / s);
        inv_v.push(1.0 / v);
    }

    log::debug!(
        "Reciprocal transform kept {} of {} samples",
        inv_s.len(),
        concentrations.len()
    );

    if inv_s.len() < MIN_FIT_SAMPLES {
        return Err(KineticsError::degenerate(format!(
            "Need at least {MIN_FIT_SAMPLES} samples with S > 0 for the fit (got {}).",
            inv_s.len()
        )));
    }

    Ok(ReciprocalSample { inv_s, inv_v })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KineticsParameters;
    use crate::models::evaluate;

    #[test]
    fn drops_exactly_the_zero_concentration_sample() {
        let curve = evaluate(&KineticsParameters::default(), 200).unwrap();
        let sample = reciprocal_sample(&curve.concentrations, &curve.velocities).unwrap();

        assert_eq!(sample.len(), 199);
        assert_eq!(sample.inv_s[0], 1.0 / curve.concentrations[1]);
        assert_eq!(sample.inv_v[198], 1.0 / curve.velocities[199]);
    }

    #[test]
    fn drops_every_non_positive_concentration() {
        let s = [0.0, -1.0, 0.0, 1.0, 2.0];
        let v = [0.0, 5.0, 0.0, 0.5, 0.8];
        let sample = reciprocal_sample(&s, &v).unwrap();

        assert_eq!(sample.inv_s, vec![1.0, 0.5]);
        assert_eq!(sample.inv_v, vec![2.0, 1.25]);
    }

    #[test]
    fn single_usable_sample_is_degenerate() {
        let err = reciprocal_sample(&[0.0, 1.0], &[0.0, 0.5]).unwrap_err();
        assert!(matches!(err, KineticsError::DegenerateInput(_)));
    }

    #[test]
    fn zero_velocity_is_degenerate() {
        let err = reciprocal_sample(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.5]).unwrap_err();
        assert!(matches!(err, KineticsError::DegenerateInput(_)));
    }

    #[test]
    fn length_mismatch_is_degenerate() {
        let err = reciprocal_sample(&[1.0, 2.0], &[0.5]).unwrap_err();
        assert!(matches!(err, KineticsError::DegenerateInput(_)));
    }
}
