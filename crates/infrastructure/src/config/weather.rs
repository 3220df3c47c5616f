//! CWA weather configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Weather lookup configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// CWA open-data authorization key (sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Datastore base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Dataset identifier
    #[serde(default = "default_dataset_id")]
    pub dataset_id: String,

    /// Township queried in the dataset
    #[serde(default = "default_location_name")]
    pub location_name: String,

    /// Place name shown in replies
    #[serde(default = "default_location_label")]
    pub location_label: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("dataset_id", &self.dataset_id)
            .field("location_name", &self.location_name)
            .field("location_label", &self.location_label)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://opendata.cwa.gov.tw/api/v1/rest/datastore".to_string()
}

fn default_dataset_id() -> String {
    "F-D0047-069".to_string()
}

fn default_location_name() -> String {
    "板橋區".to_string()
}

fn default_location_label() -> String {
    "新北市板橋區".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            dataset_id: default_dataset_id(),
            location_name: default_location_name(),
            location_label: default_location_label(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Configuration for the CWA HTTP client
    pub fn client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            base_url: self.base_url.clone(),
            dataset_id: self.dataset_id.clone(),
            location_name: self.location_name.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
