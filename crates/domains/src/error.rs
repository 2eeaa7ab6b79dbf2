//! # DomainError
//!
//! Centralized error handling for the portfolio.
//! Every failure a request can hit maps to one of these variants.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Admin secret missing or wrong
    #[error("Unauthorized")]
    Unauthorized,

    /// A required field is missing, empty or of the wrong shape
    #[error("{0}")]
    Validation(String),

    /// Delete targeted an id with no row
    #[error("{0}")]
    NotFound(String),

    /// Infrastructure failure (e.g. SQLite I/O)
    #[error("internal service error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// A specialized Result type for portfolio logic.
pub type Result<T> = std::result::Result<T, DomainError>;
