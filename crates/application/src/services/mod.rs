//! Application services - Use case implementations

mod reply_service;
mod weather_service;

pub use reply_service::{DispatchSummary, EventOutcome, ReplyService};
pub use weather_service::WeatherService;
