//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - rate-law parameters and run configuration (`KineticsParameters`, `RunConfig`)
//! - the evaluated curve and its reciprocal transform (`SaturationCurve`, `ReciprocalSample`)
//! - fit outputs (`FitResult`, `FitQuality`)

pub mod types;

pub use types::*;
