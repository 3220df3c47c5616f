//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Reply token was empty or blank
    #[error("Invalid reply token: {0}")]
    InvalidReplyToken(String),
}
