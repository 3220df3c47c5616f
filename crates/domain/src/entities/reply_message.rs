//! Outgoing reply bound to one inbound event

use crate::value_objects::ReplyToken;

/// Text messages answering one reply token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage {
    reply_token: ReplyToken,
    texts: Vec<String>,
}

impl ReplyMessage {
    /// Create a reply carrying a single text
    pub fn text(reply_token: ReplyToken, text: impl Into<String>) -> Self {
        Self {
            reply_token,
            texts: vec![text.into()],
        }
    }

    pub const fn reply_token(&self) -> &ReplyToken {
        &self.reply_token
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }
}
