//! Reply service - keyword dispatch for inbound events
//!
//! Each text message gets exactly one reply: the weather report when the
//! text is the weather keyword, the fallback prompt otherwise. Events are
//! processed one after another in the order they arrived.

use std::{fmt, sync::Arc};

use domain::{BotCommand, InboundEvent, ReplyMessage, ReplyToken, replies::FALLBACK_PROMPT};
use tracing::{debug, error, info, instrument};

use crate::{ports::ReplyPort, services::WeatherService};

/// What happened to a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// A reply was delivered
    Replied,
    /// Sending the reply failed; the failure was logged and dropped
    ReplyFailed,
    /// Event kind the bot does not answer
    Ignored,
}

/// Counts of outcomes for one webhook delivery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub replied: usize,
    pub failed: usize,
    pub ignored: usize,
}

impl DispatchSummary {
    fn record(&mut self, outcome: EventOutcome) {
        match outcome {
            EventOutcome::Replied => self.replied += 1,
            EventOutcome::ReplyFailed => self.failed += 1,
            EventOutcome::Ignored => self.ignored += 1,
        }
    }

    pub const fn total(&self) -> usize {
        self.replied + self.failed + self.ignored
    }
}

/// Service answering inbound events
#[derive(Clone)]
pub struct ReplyService {
    weather: WeatherService,
    replies: Arc<dyn ReplyPort>,
}

impl fmt::Debug for ReplyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplyService")
            .field("weather", &self.weather)
            .finish_non_exhaustive()
    }
}

impl ReplyService {
    pub fn new(weather: WeatherService, replies: Arc<dyn ReplyPort>) -> Self {
        Self { weather, replies }
    }

    /// Reply text for a command
    pub async fn reply_text(&self, command: BotCommand) -> String {
        match command {
            BotCommand::WeatherLookup => self.weather.fetch_banqiao_weather().await,
            BotCommand::Prompt => FALLBACK_PROMPT.to_string(),
        }
    }

    /// Handle one event
    #[instrument(skip(self, event), fields(kind = event.kind()))]
    pub async fn handle_event(&self, event: &InboundEvent) -> EventOutcome {
        let InboundEvent::TextMessage { reply_token, text } = event else {
            debug!("Ignoring unsupported event");
            return EventOutcome::Ignored;
        };

        debug!(text_len = text.len(), text = %text, "Received text message");

        let reply = self.reply_text(BotCommand::parse(text)).await;
        self.send(reply_token, reply).await
    }

    /// Handle every event of a delivery in order
    pub async fn handle_events(&self, events: &[InboundEvent]) -> DispatchSummary {
        let mut summary = DispatchSummary::default();
        for event in events {
            summary.record(self.handle_event(event).await);
        }

        info!(
            replied = summary.replied,
            failed = summary.failed,
            ignored = summary.ignored,
            "Webhook events processed"
        );
        summary
    }

    async fn send(&self, reply_token: &ReplyToken, text: String) -> EventOutcome {
        let message = ReplyMessage::text(reply_token.clone(), text);
        match self.replies.reply(&message).await {
            Ok(()) => EventOutcome::Replied,
            Err(e) => {
                error!(error = %e, "Failed to send reply");
                EventOutcome::ReplyFailed
            },
        }
    }
}
