//! CWA weather client
//!
//! HTTP client for the CWA open-data REST datastore.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    ApiResponse, CONDITION_ELEMENT, CurrentConditions, TEMPERATURE_ELEMENT, WeatherElement,
};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured; no request was sent
    #[error("CWA API key is not configured")]
    NotConfigured,

    /// The HTTP client could not be built
    #[error("Client initialization failed: {0}")]
    ClientInit(String),

    /// Provider unreachable or did not answer within the timeout
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Unexpected status or unreadable body
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Response body does not have the expected structure
    #[error("Unexpected data format: {0}")]
    DataFormat(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            Self::ConnectionFailed(e.to_string())
        } else {
            Self::RequestFailed(e.to_string())
        }
    }
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// CWA authorization key; requests are refused locally when absent
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Datastore base URL (default: <https://opendata.cwa.gov.tw/api/v1/rest/datastore>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Dataset identifier (default: `F-D0047-069`, New Taipei City townships)
    #[serde(default = "default_dataset_id")]
    pub dataset_id: String,

    /// Township to query (default: 板橋區)
    #[serde(default = "default_location_name")]
    pub location_name: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("dataset_id", &self.dataset_id)
            .field("location_name", &self.location_name)
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
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the current temperature and condition for the configured township
    async fn current_conditions(&self) -> Result<CurrentConditions, WeatherError>;

    /// Check if the weather service is reachable with the configured key
    async fn is_healthy(&self) -> bool;
}

/// CWA open-data HTTP client implementation
#[derive(Debug)]
pub struct CwaClient {
    client: Client,
    config: WeatherConfig,
}

impl CwaClient {
    /// Create a new CWA client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Dataset endpoint URL
    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.dataset_id
        )
    }

    /// Parse the response body into current conditions
    ///
    /// Descends `records.locations[0].location[0].weatherElement` and maps
    /// every element to the first value of its first time slot.
    fn parse_conditions(body: &[u8]) -> Result<CurrentConditions, WeatherError> {
        let response: ApiResponse =
            serde_json::from_slice(body).map_err(|e| WeatherError::DataFormat(e.to_string()))?;

        let location = response
            .records
            .locations
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::DataFormat("records.locations is empty".to_string()))?
            .location
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::DataFormat("locations[0].location is empty".to_string()))?;

        let mut elements = BTreeMap::new();
        for element in location.weather_element {
            let (name, value) = Self::first_value(element)?;
            elements.insert(name, value);
        }

        Ok(CurrentConditions {
            location_name: location.location_name,
            elements,
        })
    }

    fn first_value(element: WeatherElement) -> Result<(String, String), WeatherError> {
        let name = element.element_name;
        let value = element
            .time
            .into_iter()
            .next()
            .and_then(|slot| slot.element_value.into_iter().next())
            .ok_or_else(|| WeatherError::DataFormat(format!("element {name} has no value")))?;

        Ok((name, value.value.into_string()))
    }
}

#[async_trait]
impl WeatherClient for CwaClient {
    #[instrument(skip(self), fields(dataset = %self.config.dataset_id, location = %self.config.location_name))]
    async fn current_conditions(&self) -> Result<CurrentConditions, WeatherError> {
        let Some(api_key) = self.api_key() else {
            return Err(WeatherError::NotConfigured);
        };

        let element_names = format!("{TEMPERATURE_ELEMENT},{CONDITION_ELEMENT}");
        let url = self.endpoint();
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("Authorization", api_key),
                ("locationName", self.config.location_name.as_str()),
                ("elementName", element_names.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response.bytes().await?;

        let conditions = Self::parse_conditions(&body)?;
        debug!(elements = conditions.elements.len(), "Parsed current weather");
        Ok(conditions)
    }

    async fn is_healthy(&self) -> bool {
        self.current_conditions().await.is_ok()
    }
}
