//! Observation generation.

pub mod sample;

pub use sample::*;
