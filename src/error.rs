//! Error types for the N-Queens GA.
//!
//! Every failure is a configuration or input problem detected before the
//! evolutionary loop starts. The loop itself is total over its domain.

use thiserror::Error;

/// Error type for solver setup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// A configuration parameter is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A board was built from rows that do not encode an N×N placement.
    #[error("Invalid board: {reason} (rows = {rows:?})")]
    InvalidBoard { rows: Vec<usize>, reason: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
