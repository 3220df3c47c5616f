//! Reply port
//!
//! Sends reply messages back to the messaging platform.

use async_trait::async_trait;
use domain::ReplyMessage;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for answering inbound events
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReplyPort: Send + Sync {
    /// Send a reply bound to the message's reply token
    async fn reply(&self, message: &ReplyMessage) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ReplyPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ReplyPort>();
    }
}
