//! Engine error types

use thiserror::Error;

/// Errors surfaced by the analytics components
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Input violates a documented precondition
    #[error("Validation error: {0}")]
    Validation(String),
    /// Numerical degeneracy with no safe default
    #[error("Computation error: {0}")]
    Computation(String),
}

impl AnalyticsError {
    /// Build a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a computation error
    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }

    /// True for caller-side input errors (4xx in an HTTP layer)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
