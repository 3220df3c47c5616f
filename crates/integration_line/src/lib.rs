//! LINE integration
//!
//! Handles LINE Messaging API webhooks, replies and rich menu administration.

pub mod client;
pub mod rich_menu;
pub mod webhook;

pub use client::{LineClient, LineClientConfig, LineError};
pub use rich_menu::{
    Bounds, GRID_COLUMNS, GRID_ROWS, ImageType, MenuAction, RichMenu, RichMenuArea,
    RichMenuImage, RichMenuSize,
};
pub use webhook::{
    EventSource, MessageContent, SIGNATURE_HEADER, WebhookEvent, WebhookPayload, extract_events,
    sign_body, verify_signature,
};
