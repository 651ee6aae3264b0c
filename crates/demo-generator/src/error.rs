//! Error types for demo data generation and dataset persistence.

use thiserror::Error;

/// Errors that can occur when validating a generator configuration.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The owner count cannot exceed the total user count.
    #[error("owner count {owners} exceeds user count {users}")]
    OwnersExceedUsers { owners: usize, users: usize },

    /// At least one survey is required.
    #[error("survey count must be at least 1")]
    NoSurveys,

    /// At least one user is required (responses need respondents).
    #[error("user count must be at least 1")]
    NoUsers,

    /// The per-survey response cap must allow at least one response.
    #[error("max responses per survey must be at least 1")]
    NoResponses,
}

/// Errors that can occur when persisting or loading a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A structural invariant does not hold.
    #[error("dataset invariant violated: {0}")]
    Invariant(String),
}
