use mc_core::McError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] McError),

    #[error("{what} column has {got} entries, expected {expected}")]
    CohortMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("initial {cohort} individual {index} at {position} lies outside the simulation box")]
    OutOfBounds {
        cohort:   &'static str,
        index:    usize,
        position: mc_core::Vec2,
    },
}

impl SimError {
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SimError::Core(e) if e.is_invalid_parameter())
    }

    /// Malformed input, including caller-supplied populations.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            SimError::Core(e) => e.is_invalid_input(),
            SimError::CohortMismatch { .. } | SimError::OutOfBounds { .. } => true,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
