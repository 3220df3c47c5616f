//! Application layer - Use cases and orchestration
//!
//! Contains port definitions and the services that turn inbound events into
//! replies. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
