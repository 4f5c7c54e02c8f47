//! Workspace error type.
//!
//! Sub-crates either return `McError` directly or wrap it as one variant of
//! their own enum (see `mc_sim::SimError`).  Every error here is raised
//! before any random draw or state mutation takes place.

use thiserror::Error;

/// The common error type for all `mc-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum McError {
    /// A model parameter is outside its admissible range (`beta < 0`,
    /// mask protection below 1, negative standard deviation, …).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Structurally malformed input (empty populations, inverted boxes,
    /// non-positive time steps, mismatched array lengths, …).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl McError {
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, McError::InvalidParameter(_))
    }

    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, McError::InvalidInput(_))
    }
}

/// Shorthand result type for all `mc-*` crates.
pub type McResult<T> = Result<T, McError>;
