//! `mm-kinetics` library crate.
//!
//! The binary (`mmk`) is a thin wrapper around this library so that:
//!
//! - the numeric core (rate law, reciprocal transform, OLS) is testable without
//!   spawning processes or touching the filesystem
//! - chart rendering stays behind a trait and can be swapped in tests

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
