//! Domain layer for the PCD bot
//!
//! Contains the inbound event model, reply values, weather reports and the
//! fixed texts the bot answers with. This layer has no I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod replies;
pub mod value_objects;

pub use commands::BotCommand;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
