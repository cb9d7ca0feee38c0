use thiserror::Error;

use crate::errors::domain::DomainError;

/// Top-level engine error.
///
/// Covers configuration problems and defensive invariant violations. The
/// quiz itself has no failure mode that halts operation: lookup misses are
/// silent no-ops, out-of-range coordinates are clamped, and an incomplete
/// ordering at check time is a normal outcome, not an error.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl EngineError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(..) => EngineError::validation(err.to_string()),
        }
    }
}
