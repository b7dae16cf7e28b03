//! Mathematical utilities: sample grids and least squares.

pub mod grid;
pub mod ols;

pub use grid::*;
pub use ols::*;
