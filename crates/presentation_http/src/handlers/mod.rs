//! HTTP request handlers

pub mod health;
pub mod line;
