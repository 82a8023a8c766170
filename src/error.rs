//! Error types for housing projections

use thiserror::Error;

/// Errors raised while configuring or running a projection
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Career id is not present in the growth table
    #[error("unknown career: {0}")]
    UnknownCareer(String),

    /// Neither a built-in location nor a group
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Input outside its valid domain
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed career table row
    #[error("invalid career table row for '{career}': {reason}")]
    InvalidCareerRow { career: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ProjectionError>;
