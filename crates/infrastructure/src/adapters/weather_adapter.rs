//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::WeatherReport;
use integration_weather::{CwaClient, WeatherClient, WeatherError};
use tracing::{debug, instrument};

use crate::config::WeatherConfig;

/// Adapter for the CWA open-data API
pub struct CwaWeatherAdapter {
    client: CwaClient,
    location_label: String,
}

impl std::fmt::Debug for CwaWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CwaWeatherAdapter")
            .field("client", &"CwaClient")
            .field("location_label", &self.location_label)
            .finish()
    }
}

impl CwaWeatherAdapter {
    /// Create an adapter from the application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &WeatherConfig) -> Result<Self, ApplicationError> {
        let client = CwaClient::new(config.client_config()).map_err(Self::map_error)?;
        Ok(Self {
            client,
            location_label: config.location_label.clone(),
        })
    }

    /// Convert integration errors to application errors
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::NotConfigured => {
                ApplicationError::Configuration("CWA_API_KEY is not set".into())
            },
            WeatherError::ClientInit(e)
            | WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::DataFormat(e) => ApplicationError::DataFormat(e),
        }
    }
}

#[async_trait]
impl WeatherPort for CwaWeatherAdapter {
    #[instrument(skip(self))]
    async fn current_report(&self) -> Result<WeatherReport, ApplicationError> {
        let conditions = self
            .client
            .current_conditions()
            .await
            .map_err(Self::map_error)?;

        debug!(
            location = ?conditions.location_name,
            elements = conditions.elements.len(),
            "Current conditions received"
        );

        Ok(WeatherReport {
            location_label: self.location_label.clone(),
            condition: conditions.condition().map(str::to_string),
            temperature: conditions.temperature().map(str::to_string),
        })
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
