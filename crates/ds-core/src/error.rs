//! # AppError
//!
//! Centralized error handling for the showcase catalog.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all ds-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Record not found (e.g., Project, JobListing)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Submission validation failure; carries the specific missing or
    /// invalid field names so the caller can report them.
    #[error("validation failed, missing or invalid fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Durable store write failure (quota exceeded, unavailable backend).
    /// Recoverable: no data-loss guarantee is promised.
    #[error("store write failed: {0}")]
    Store(String),

    /// Anything else (e.g., serialization of a domain value)
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for catalog logic.
pub type Result<T> = std::result::Result<T, AppError>;
