//! Input/output helpers.
//!
//! - curve CSV export (`export`)
//! - fit JSON export (`fit_file`)

pub mod export;
pub mod fit_file;

pub use export::*;
pub use fit_file::*;
