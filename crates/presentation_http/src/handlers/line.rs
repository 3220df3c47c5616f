//! LINE webhook handler
//!
//! Verifies the `X-Line-Signature` header against the raw body, then answers
//! every text message event in order before acknowledging the delivery.

use application::ApplicationError;
use axum::{body::Bytes, extract::State, http::HeaderMap};
use domain::InboundEvent;
use integration_line::{SIGNATURE_HEADER, WebhookPayload, extract_events, verify_signature};
use tracing::{error, info, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// LINE webhook callback (POST)
#[instrument(skip(state, headers, body), fields(body_len = body.len()))]
pub async fn handle_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .map(|value| value.to_str().unwrap_or_default());

    let events = parse_callback(&body, signature, state.config.line.channel_secret())?;
    info!(event_count = events.len(), "Webhook verified");

    state.reply_service.handle_events(&events).await;
    Ok("OK")
}

/// Verify and decode a callback body
///
/// The signature check always runs before the body is parsed.
pub fn parse_callback(
    body: &[u8],
    signature: Option<&str>,
    channel_secret: &str,
) -> Result<Vec<InboundEvent>, ApplicationError> {
    let Some(signature) = signature else {
        warn!("Callback without signature header");
        return Err(ApplicationError::Authentication(
            "missing signature header".into(),
        ));
    };

    if channel_secret.is_empty() {
        warn!("CHANNEL_SECRET is not configured, rejecting callback");
        return Err(ApplicationError::Configuration(
            "CHANNEL_SECRET is not set".into(),
        ));
    }

    if !verify_signature(body, signature, channel_secret) {
        warn!("Callback signature mismatch");
        return Err(ApplicationError::Authentication("invalid signature".into()));
    }

    let payload: WebhookPayload = serde_json::from_slice(body).map_err(|e| {
        error!(error = %e, "Malformed webhook body");
        ApplicationError::MalformedInput(e.to_string())
    })?;

    Ok(extract_events(&payload))
}

#[cfg(test)]
mod tests {
    use integration_line::sign_body;

    use super::*;

    const SECRET: &str = "channel-secret";

    fn signed(body: &str) -> String {
        sign_body(body.as_bytes(), SECRET).unwrap()
    }

    #[test]
    fn missing_signature_is_authentication_error() {
        let result = parse_callback(b"{}", None, SECRET);
        assert!(matches!(result, Err(ApplicationError::Authentication(_))));
    }

    #[test]
    fn missing_secret_is_configuration_error() {
        let body = r#"{"events":[]}"#;
        let result = parse_callback(body.as_bytes(), Some(&signed(body)), "");
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn bad_signature_is_checked_before_parsing() {
        let result = parse_callback(b"not json", Some("AAAA"), SECRET);
        assert!(matches!(result, Err(ApplicationError::Authentication(_))));
    }

    #[test]
    fn non_base64_signature_is_rejected() {
        let result = parse_callback(br#"{"events":[]}"#, Some("%%%"), SECRET);
        assert!(matches!(result, Err(ApplicationError::Authentication(_))));
    }

    #[test]
    fn signed_malformed_body_is_malformed_input() {
        let body = "{not json";
        let result = parse_callback(body.as_bytes(), Some(&signed(body)), SECRET);
        assert!(matches!(result, Err(ApplicationError::MalformedInput(_))));
    }

    #[test]
    fn signed_valid_body_yields_events() {
        let body = r#"{"destination":"U1","events":[
            {"type":"message","replyToken":"r1","message":{"type":"text","id":"1","text":"PCD"}},
            {"type":"follow","replyToken":"r2"}
        ]}"#;
        let events = parse_callback(body.as_bytes(), Some(&signed(body)), SECRET).unwrap();

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InboundEvent::TextMessage { .. }));
        assert_eq!(events[1], InboundEvent::unsupported("follow"));
    }
}
