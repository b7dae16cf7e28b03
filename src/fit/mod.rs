//! Linear estimator.
//!
//! Responsibilities:
//!
//! - filter out non-positive concentrations and form `(1/S, 1/v)`
//! - fit a straight line by OLS
//! - back-transform slope/intercept into `Vmax` and `Km` estimates

pub mod lineweaver;
pub mod reciprocal;

pub use lineweaver::*;
pub use reciprocal::*;
