//! Capability traits injected into the popup, relay, and content script.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser supplies tab queries and message passing as ambient
//! globals. Routing them through these traits keeps the extension
//! sandbox at the edges and lets every flow run against fakes in native
//! tests. `browser` provides the real implementations.

use async_trait::async_trait;

use crate::messages::Message;

/// Error raised when a message cannot be handed to the channel.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// No receiver is listening, e.g. the content script has not loaded.
    #[error("no receiver for message")]
    NoReceiver,
    /// The message failed to encode for the channel.
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Query for the currently active browser tab.
#[async_trait(?Send)]
pub trait TabQuery {
    /// URL of the active tab, or `None` when no active tab exists.
    ///
    /// Always answered asynchronously; callers must await the reply
    /// rather than assume synchronous completion.
    async fn active_tab_url(&self) -> Option<String>;
}

/// One-way message channel toward another extension surface.
pub trait Messenger {
    /// Send a message. At-most-once: a failed send means the message is
    /// gone, there is no queue.
    ///
    /// # Errors
    ///
    /// [`SendError::NoReceiver`] when nothing is listening, or
    /// [`SendError::Encode`] when the message cannot be encoded.
    fn send(&self, message: &Message) -> Result<(), SendError>;
}

/// The content script's page-local cell for the current URL.
pub trait UrlStore {
    fn set_current_url(&self, url: &str);
    fn current_url(&self) -> Option<String>;
}
