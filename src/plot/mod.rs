//! Chart rendering.
//!
//! - chart descriptions built from a run (`chart`)
//! - font registration for chart text (`font`)
//! - the `ChartRenderer` seam and its PNG implementation (`png`)

pub mod chart;
pub mod font;
pub mod png;

pub use chart::*;
pub use png::*;
