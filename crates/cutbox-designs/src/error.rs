//! Error types for the designs crate.
//!
//! This module provides structured error types for measurement validation,
//! design lookup, cutline rendering and template handling.

use cutbox_settings::SettingsError;
use thiserror::Error;

/// Errors that can occur while building or rendering a design.
#[derive(Error, Debug)]
pub enum DesignError {
    /// A required dimension is missing, zero or negative, or out of range.
    #[error("Invalid measurement '{name}': {reason}")]
    InvalidMeasurement { name: String, reason: String },

    /// Settings that cannot be satisfied together.
    #[error("Inconsistent design configuration: {0}")]
    Inconsistent(String),

    /// The design tag is not registered.
    #[error("Unknown design: {0}")]
    UnknownDesign(String),

    /// A cutline refers to a point the lattice does not have.
    #[error("Cutline refers to point {index} but the lattice has {len} points")]
    UnresolvedPoint { index: usize, len: usize },

    /// A cutline that cannot be rendered.
    #[error("Invalid cutline: {0}")]
    InvalidCutline(String),

    /// The drawing template could not be used.
    #[error("Template error: {0}")]
    Template(String),

    /// Settings could not be resolved.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

impl DesignError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidMeasurement {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for design operations.
pub type DesignResult<T> = Result<T, DesignError>;
