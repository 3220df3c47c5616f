//! Inbound events delivered by the messaging platform

use crate::{commands::BotCommand, value_objects::ReplyToken};

/// One event from a webhook delivery
///
/// Only text messages are acted upon. Every other event or message kind
/// is kept as [`InboundEvent::Unsupported`] so callers can log and skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A user sent a text message
    TextMessage {
        /// Token used to answer this message
        reply_token: ReplyToken,
        /// Message text as sent by the user
        text: String,
    },
    /// Any event the bot does not answer
    Unsupported {
        /// Platform event kind, e.g. `follow` or `message/sticker`
        kind: String,
    },
}

impl InboundEvent {
    /// Create a text message event
    pub fn text_message(reply_token: ReplyToken, text: impl Into<String>) -> Self {
        Self::TextMessage {
            reply_token,
            text: text.into(),
        }
    }

    /// Create an unsupported event of the given kind
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported { kind: kind.into() }
    }

    /// The command this event asks for, if it is answerable at all
    pub fn command(&self) -> Option<BotCommand> {
        match self {
            Self::TextMessage { text, .. } => Some(BotCommand::parse(text)),
            Self::Unsupported { .. } => None,
        }
    }

    /// Reply token of an answerable event
    pub const fn reply_token(&self) -> Option<&ReplyToken> {
        match self {
            Self::TextMessage { reply_token, .. } => Some(reply_token),
            Self::Unsupported { .. } => None,
        }
    }

    /// Short label for logging
    pub fn kind(&self) -> &str {
        match self {
            Self::TextMessage { .. } => "message/text",
            Self::Unsupported { kind } => kind,
        }
    }
}
