//! Error types for proximo.

use thiserror::Error;

/// Errors that can occur in proximo operations.
///
/// Display strings are what the user sees in the Error modal, so the
/// variants carrying a service message print it unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProximoError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Could not reach the event service: {0}")]
    Network(String),

    #[error("{0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProximoError {
    pub fn event_not_found(id: &str) -> Self {
        ProximoError::NotFound(format!("Event not found: {id}"))
    }
}

impl From<serde_json::Error> for ProximoError {
    fn from(err: serde_json::Error) -> Self {
        ProximoError::Serialization(err.to_string())
    }
}

/// Result type alias for proximo operations.
pub type ProximoResult<T> = Result<T, ProximoError>;
