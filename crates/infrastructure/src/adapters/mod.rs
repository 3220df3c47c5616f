//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod line_adapter;
mod weather_adapter;

pub use line_adapter::LineReplyAdapter;
pub use weather_adapter::CwaWeatherAdapter;
