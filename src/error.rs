//! Error types.

/// Errors raised while setting up an [`Evolver`](crate::ga::Evolver).
///
/// A run itself never fails: exhausting the generation budget is reported
/// through [`EvolverResult::converged`](crate::ga::EvolverResult::converged).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvolverError {
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EvolverError>;
