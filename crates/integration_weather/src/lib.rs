//! CWA weather integration
//!
//! Client for the Central Weather Administration open-data API
//! (<https://opendata.cwa.gov.tw>). Fetches the township forecast dataset
//! and extracts the current temperature and weather condition.

pub mod client;
mod models;

pub use client::{CwaClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CONDITION_ELEMENT, CurrentConditions, TEMPERATURE_ELEMENT};
