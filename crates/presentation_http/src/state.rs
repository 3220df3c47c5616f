//! Application state shared across handlers

use std::sync::Arc;

use application::ReplyService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Keyword dispatch for inbound events
    pub reply_service: Arc<ReplyService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
