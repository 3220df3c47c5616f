//! Value Objects - Immutable, identity-less domain primitives

mod reply_token;

pub use reply_token::ReplyToken;
