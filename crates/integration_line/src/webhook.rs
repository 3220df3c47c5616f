//! LINE webhook handler
//!
//! Receives and validates webhook requests from the LINE Messaging API.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use domain::{InboundEvent, ReplyToken};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the base64 HMAC-SHA256 of the request body
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// LINE webhook request body
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    /// Bot user ID the events are addressed to
    #[serde(default)]
    pub destination: Option<String>,
    pub events: Vec<WebhookEvent>,
}

/// One webhook event; only the fields the bot reads are modelled
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<MessageContent>,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub webhook_event_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl WebhookEvent {
    /// Convert into the domain event model
    ///
    /// Anything other than a text message with a usable reply token becomes
    /// [`InboundEvent::Unsupported`].
    pub fn to_inbound_event(&self) -> InboundEvent {
        let Some(message) = self.message.as_ref().filter(|_| self.event_type == "message") else {
            return InboundEvent::unsupported(self.event_type.clone());
        };

        let kind = format!("{}/{}", self.event_type, message.message_type);
        let Some(text) = message.text.as_ref().filter(|_| message.message_type == "text") else {
            return InboundEvent::unsupported(kind);
        };

        match self.reply_token.as_deref().map(ReplyToken::new) {
            Some(Ok(token)) => InboundEvent::text_message(token, text.clone()),
            _ => {
                warn!(
                    webhook_event_id = ?self.webhook_event_id,
                    "Text message without a usable reply token"
                );
                InboundEvent::unsupported(kind)
            },
        }
    }
}

/// Extract domain events from a webhook payload, preserving order
pub fn extract_events(payload: &WebhookPayload) -> Vec<InboundEvent> {
    payload
        .events
        .iter()
        .map(WebhookEvent::to_inbound_event)
        .collect()
}

/// Verify webhook signature
///
/// The signature is the base64-encoded HMAC-SHA256 of the raw body keyed by
/// the channel secret. Comparison is constant-time.
pub fn verify_signature(payload: &[u8], signature: &str, secret: &str) -> bool {
    if secret.is_empty() {
        warn!("Channel secret is empty, rejecting signature");
        return false;
    }

    let Ok(expected) = BASE64.decode(signature.trim()) else {
        debug!("Failed to decode signature base64");
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        warn!("Failed to create HMAC");
        return false;
    };

    mac.update(payload);
    mac.verify_slice(&expected).is_ok()
}

/// Compute the signature the platform would send for `payload`
///
/// Returns `None` only if the HMAC cannot be keyed.
pub fn sign_body(payload: &[u8], secret: &str) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(payload);
    Some(BASE64.encode(mac.finalize().into_bytes()))
}
