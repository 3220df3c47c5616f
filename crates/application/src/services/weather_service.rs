//! Weather lookup service
//!
//! Turns the weather port's result into the text sent back to the user.
//! Every outcome, including failures, is a displayable string.

use std::{fmt, sync::Arc};

use domain::replies::{WEATHER_FORMAT_INVALID, WEATHER_NOT_CONFIGURED, WEATHER_QUERY_FAILED};
use tracing::{debug, error, instrument, warn};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Service answering weather requests for Banqiao
#[derive(Clone)]
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Look up the current weather and render the reply text
    #[instrument(skip(self))]
    pub async fn fetch_banqiao_weather(&self) -> String {
        match self.weather.current_report().await {
            Ok(report) => {
                debug!(
                    condition = ?report.condition,
                    temperature = ?report.temperature,
                    "Weather report received"
                );
                report.render()
            },
            Err(e) => Self::failure_text(&e).to_string(),
        }
    }

    /// Whether the weather backend answers
    pub async fn is_available(&self) -> bool {
        self.weather.is_available().await
    }

    fn failure_text(err: &ApplicationError) -> &'static str {
        match err {
            ApplicationError::Configuration(_) => {
                warn!(error = %err, "Weather lookup skipped");
                WEATHER_NOT_CONFIGURED
            },
            ApplicationError::DataFormat(_) => {
                error!(error = %err, "Weather data has unexpected format");
                WEATHER_FORMAT_INVALID
            },
            _ => {
                error!(error = %err, "Weather lookup failed");
                WEATHER_QUERY_FAILED
            },
        }
    }
}
