//! Simulated velocity measurements.
//!
//! Observations are the model velocities perturbed by multiplicative
//! log-normal noise:
//!
//! `v_obs = v · exp(sd · z)`, `z ~ N(0, 1)`
//!
//! Multiplicative noise keeps every observation on the same side of zero as the
//! model value, so `v(0) = 0` stays exactly zero and positive velocities stay
//! positive (their reciprocals remain defined). The RNG is seeded, so a given
//! `(sd, seed)` always produces the same observations.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{NoiseConfig, SaturationCurve};
use crate::error::KineticsError;

/// Velocities fed to the estimator.
///
/// With noise disabled this is the model series unchanged.
pub fn observe(curve: &SaturationCurve, noise: &NoiseConfig) -> Result<Vec<f64>, KineticsError> {
    if !(noise.sd.is_finite() && noise.sd >= 0.0) {
        return Err(KineticsError::invalid(format!(
            "Noise standard deviation must be finite and >= 0 (got {}).",
            noise.sd
        )));
    }
    if !noise.is_enabled() {
        return Ok(curve.velocities.clone());
    }

    let mut rng = StdRng::seed_from_u64(noise.seed);
    let normal = Normal::new(0.0, noise.sd)
        .map_err(|e| KineticsError::invalid(format!("Noise distribution error: {e}")))?;

    let observed = curve
        .velocities
        .iter()
        .map(|&v| v * normal.sample(&mut rng).exp())
        .collect();

    log::info!("Applied log-normal noise (sd={}, seed={})", noise.sd, noise.seed);
    Ok(observed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KineticsParameters;
    use crate::models::evaluate;

    fn curve() -> SaturationCurve {
        evaluate(&KineticsParameters::default(), 50).unwrap()
    }

    #[test]
    fn disabled_noise_is_identity() {
        let curve = curve();
        let obs = observe(&curve, &NoiseConfig::default()).unwrap();
        assert_eq!(obs, curve.velocities);
    }

    #[test]
    fn noise_is_reproducible_and_sign_preserving() {
        let curve = curve();
        let noise = NoiseConfig { sd: 0.05, seed: 7 };

        let a = observe(&curve, &noise).unwrap();
        let b = observe(&curve, &noise).unwrap();
        assert_eq!(a, b);

        assert_eq!(a[0], 0.0);
        assert!(a[1..].iter().all(|&v| v > 0.0));
        assert!(a.iter().zip(&curve.velocities).skip(1).any(|(o, m)| o != m));
    }

    #[test]
    fn different_seeds_differ() {
        let curve = curve();
        let a = observe(&curve, &NoiseConfig { sd: 0.05, seed: 1 }).unwrap();
        let b = observe(&curve, &NoiseConfig { sd: 0.05, seed: 2 }).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_sd_is_rejected() {
        let curve = curve();
        for sd in [-0.1, f64::NAN, f64::INFINITY] {
            let err = observe(&curve, &NoiseConfig { sd, seed: 0 }).unwrap_err();
            assert!(matches!(err, KineticsError::InvalidParameter(_)));
        }
    }
}
