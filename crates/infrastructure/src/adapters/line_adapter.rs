//! LINE reply adapter
//!
//! Implements the `ReplyPort` trait using the LINE integration crate.

use application::error::ApplicationError;
use application::ports::ReplyPort;
use async_trait::async_trait;
use domain::ReplyMessage;
use integration_line::{LineClient, LineError};
use tracing::{debug, instrument};

use crate::config::LineConfig;

/// Adapter that implements `ReplyPort` using `LineClient`
///
/// Without an access token the adapter still exists but every reply fails
/// with a configuration error.
pub struct LineReplyAdapter {
    client: Option<LineClient>,
}

impl LineReplyAdapter {
    pub fn new(client: LineClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Create an adapter from the application configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &LineConfig) -> Result<Self, LineError> {
        let client = config.client_config().map(LineClient::new).transpose()?;
        Ok(Self { client })
    }

    pub const fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Check if the LINE API accepts the configured token
    pub async fn is_available(&self) -> bool {
        match &self.client {
            Some(client) => client.is_available().await,
            None => false,
        }
    }

    fn map_error(err: LineError) -> ApplicationError {
        match err {
            LineError::Configuration(e) => ApplicationError::Configuration(e),
            LineError::InvalidRichMenu(e) | LineError::InvalidImage(e) => {
                ApplicationError::MalformedInput(e)
            },
            e @ (LineError::Request(_) | LineError::Api { .. }) => {
                ApplicationError::ExternalService(e.to_string())
            },
        }
    }
}

impl std::fmt::Debug for LineReplyAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReplyAdapter")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[async_trait]
impl ReplyPort for LineReplyAdapter {
    #[instrument(skip(self, message), fields(message_count = message.texts().len()))]
    async fn reply(&self, message: &ReplyMessage) -> Result<(), ApplicationError> {
        let client = self.client.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("CHANNEL_ACCESS_TOKEN is not set".into())
        })?;

        client
            .reply_message(message.reply_token().as_str(), message.texts())
            .await
            .map_err(Self::map_error)?;

        debug!("Reply delivered");
        Ok(())
    }
}
