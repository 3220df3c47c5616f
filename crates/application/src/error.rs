//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Webhook signature missing or invalid
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Inbound payload could not be parsed
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// External service unreachable or answered with an error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// External service answered with data of an unexpected shape
    #[error("Unexpected data format: {0}")]
    DataFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Whether the request itself was at fault
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication(_) | Self::MalformedInput(_) | Self::Domain(_)
        )
    }
}
