//! Error types.
//!
//! - `KineticsError` is returned by the numeric core (evaluation, reciprocal
//!   transform, regression, noise generation).
//! - `AppError` is what the binary reports: a message plus a process exit code.
//!
//! Exit codes:
//! - 2: invalid parameter
//! - 3: degenerate fit input
//! - 4: output failure (charts, exports)

use thiserror::Error;

/// Failures of the numeric core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KineticsError {
    /// Km <= 0, Vmax <= 0, too few grid points, or another unusable setting.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Not enough usable reciprocal samples, singular regression, zero intercept,
    /// or a zero velocity in the reciprocal transform.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

impl KineticsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput(message.into())
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Output failure (chart rendering, export writes).
    pub fn output(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<KineticsError> for AppError {
    fn from(err: KineticsError) -> Self {
        let exit_code = match err {
            KineticsError::InvalidParameter(_) => 2,
            KineticsError::DegenerateInput(_) => 3,
        };
        Self::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinetics_errors_map_to_distinct_exit_codes() {
        let invalid: AppError = KineticsError::invalid("Km must be > 0").into();
        let degenerate: AppError = KineticsError::degenerate("1 sample").into();

        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(degenerate.exit_code(), 3);
        assert_eq!(invalid.message(), "Invalid parameter: Km must be > 0");
    }
}
