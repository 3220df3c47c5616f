//! LINE Messaging API configuration.

use integration_line::LineClientConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// LINE channel configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Channel secret used to verify webhook signatures (sensitive)
    #[serde(default, skip_serializing)]
    pub channel_secret: Option<SecretString>,

    /// Channel access token used for replies and rich menus (sensitive)
    #[serde(default, skip_serializing)]
    pub channel_access_token: Option<SecretString>,

    /// Messaging API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Content upload base URL
    #[serde(default = "default_api_data_base_url")]
    pub api_data_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineConfig")
            .field(
                "channel_secret",
                &self.channel_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "channel_access_token",
                &self.channel_access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_base_url", &self.api_base_url)
            .field("api_data_base_url", &self.api_data_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_api_base_url() -> String {
    "https://api.line.me".to_string()
}

fn default_api_data_base_url() -> String {
    "https://api-data.line.me".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            channel_secret: None,
            channel_access_token: None,
            api_base_url: default_api_base_url(),
            api_data_base_url: default_api_data_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl LineConfig {
    /// Channel secret, empty when unset
    pub fn channel_secret(&self) -> &str {
        self.channel_secret
            .as_ref()
            .map_or("", |s| s.expose_secret().trim())
    }

    pub fn has_channel_secret(&self) -> bool {
        !self.channel_secret().is_empty()
    }

    pub fn has_access_token(&self) -> bool {
        self.channel_access_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().trim().is_empty())
    }

    /// Client configuration, or `None` without an access token
    pub fn client_config(&self) -> Option<LineClientConfig> {
        let token = self.channel_access_token.as_ref()?.expose_secret().trim();
        if token.is_empty() {
            return None;
        }
        Some(LineClientConfig {
            channel_access_token: token.to_string(),
            api_base_url: self.api_base_url.clone(),
            api_data_base_url: self.api_data_base_url.clone(),
            timeout_secs: self.timeout_secs,
        })
    }
}
