//! Error types for the core crate.

use thiserror::Error;

/// Errors raised by unit handling and number parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The unit name is not one of the supported physical units.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Resolution must be a positive number of dots per inch.
    #[error("Invalid resolution: {0} dpi")]
    InvalidResolution(u32),

    /// A numeric value could not be read.
    #[error("Invalid number '{input}': {reason}")]
    InvalidNumber { input: String, reason: String },
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
