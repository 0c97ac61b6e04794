//! In-process message protocol between background, content script, and
//! popup.
//!
//! DESIGN
//! ======
//! Tags are the wire strings the surfaces speak (`URL_UPDATED`,
//! `GET_CURRENT_URL`, ...), so the JSON codec round-trips without
//! adapters. Delivery is at-most-once with no queueing: senders ignore a
//! missing receiver, and only the most recent navigation wins.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use serde::{Deserialize, Serialize};
use widget::WidgetConfig;

/// A message on the extension's internal channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    /// A navigation finished in some tab; carries the new URL.
    #[serde(rename = "URL_UPDATED")]
    UrlUpdated { url: String },
    /// Ask for the active tab's URL right now. Answered asynchronously
    /// with a [`CurrentUrlReply`].
    #[serde(rename = "GET_CURRENT_URL")]
    GetCurrentUrl,
    /// Render a cosmetic launcher mockup on the visited page.
    #[serde(rename = "PREVIEW_WIDGET")]
    PreviewWidget { config: WidgetConfig },
    /// Remove the launcher mockup, if any.
    #[serde(rename = "REMOVE_PREVIEW")]
    RemovePreview,
    /// Fire-and-forget announcement a content script sends on load.
    #[serde(rename = "CONTENT_SCRIPT_LOADED")]
    ContentScriptLoaded,
}

/// Reply to [`Message::GetCurrentUrl`]: the active tab's URL, or `null`
/// when no active tab exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUrlReply {
    pub url: Option<String>,
}

/// Encode a message as JSON for the browser message channel.
///
/// # Errors
///
/// Returns a serialization error for values `serde_json` cannot encode;
/// does not happen for well-formed messages.
pub fn encode_message(message: &Message) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}

/// Decode a message received from the browser message channel.
///
/// # Errors
///
/// Returns a deserialization error for unknown tags or malformed JSON.
pub fn decode_message(raw: &str) -> Result<Message, serde_json::Error> {
    serde_json::from_str(raw)
}
