//! Kinetics evaluator.
//!
//! The rate law is a small, pure function so evaluation, noise generation, and
//! tests can share it.

pub mod rate_law;

pub use rate_law::*;
