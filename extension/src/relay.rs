//! Background relay keeping other surfaces aware of the active tab URL.
//!
//! A pure notification/query channel: most recent navigation wins, no
//! retries, no ordering guarantee beyond that, no persistence across
//! browser restarts.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use crate::capabilities::{Messenger, TabQuery};
use crate::messages::{CurrentUrlReply, Message};

/// Forward a completed navigation to the content script.
///
/// Incomplete navigations and tabs without a URL are ignored. Send
/// failures are swallowed: if the receiving script has not loaded yet,
/// the update is simply lost.
pub fn on_tab_updated(messenger: &dyn Messenger, status_complete: bool, url: Option<&str>) {
    if !status_complete {
        return;
    }
    let Some(url) = url else {
        return;
    };
    if url.is_empty() {
        return;
    }
    let _ = messenger.send(&Message::UrlUpdated { url: url.to_owned() });
}

/// Answer a [`Message::GetCurrentUrl`] query.
pub async fn answer_current_url(tabs: &dyn TabQuery) -> CurrentUrlReply {
    CurrentUrlReply { url: tabs.active_tab_url().await }
}
