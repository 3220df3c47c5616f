//! Weather service port
//!
//! Defines the interface for current-conditions retrieval.

use async_trait::async_trait;
use domain::WeatherReport;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather lookups
///
/// Implementations report a missing API key as
/// [`ApplicationError::Configuration`], transport problems as
/// [`ApplicationError::ExternalService`] and unexpected payloads as
/// [`ApplicationError::DataFormat`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the current report for the configured location
    async fn current_report(&self) -> Result<WeatherReport, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}
