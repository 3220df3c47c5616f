//! Reply token value object

use std::fmt;

use crate::errors::DomainError;

/// Single-use token the platform attaches to an inbound event
///
/// The token is opaque; the only invariant enforced here is that it is
/// not blank. Whether it is still valid is decided by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplyToken {
    value: String,
}

impl ReplyToken {
    /// Create a reply token, rejecting blank values
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let value = token.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidReplyToken(
                "reply token must not be empty".to_string(),
            ));
        }
        Ok(Self { value })
    }

    /// Get the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ReplyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
