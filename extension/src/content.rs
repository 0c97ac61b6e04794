//! Content-script message handling and preview bookkeeping.
//!
//! The script reacts to relay messages: it stores the latest page URL
//! and maintains at most one launcher preview. When running in a
//! browser, the active preview is mirrored into the page via `dom`;
//! natively the bookkeeping alone is exercised by tests.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::cell::RefCell;

use widget::{PreviewPlan, WidgetConfig};

use crate::capabilities::{Messenger, UrlStore};
use crate::messages::Message;

/// Content-script state: the page URL cell plus the single active
/// preview.
pub struct ContentScript<S: UrlStore> {
    store: S,
    preview: RefCell<Option<PreviewPlan>>,
}

impl<S: UrlStore> ContentScript<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store, preview: RefCell::new(None) }
    }

    /// Announce this script to the rest of the extension.
    /// Fire-and-forget; nobody listening is fine.
    pub fn announce_loaded(&self, messenger: &dyn Messenger) {
        let _ = messenger.send(&Message::ContentScriptLoaded);
    }

    /// Handle one relay message. Re-rendering a preview replaces the
    /// prior one; the page never holds two overlays.
    pub fn handle(&self, message: &Message) {
        match message {
            Message::UrlUpdated { url } => self.store.set_current_url(url),
            Message::PreviewWidget { config } => self.show_preview(config),
            Message::RemovePreview => self.clear_preview(),
            Message::GetCurrentUrl | Message::ContentScriptLoaded => {}
        }
    }

    /// The one preview currently on the page, if any.
    #[must_use]
    pub fn active_preview(&self) -> Option<PreviewPlan> {
        self.preview.borrow().clone()
    }

    /// The last URL pushed by the relay.
    #[must_use]
    pub fn current_url(&self) -> Option<String> {
        self.store.current_url()
    }

    fn show_preview(&self, config: &WidgetConfig) {
        let plan = PreviewPlan::from_config(config);
        #[cfg(feature = "web")]
        crate::dom::render_preview(&plan);
        *self.preview.borrow_mut() = Some(plan);
    }

    fn clear_preview(&self) {
        #[cfg(feature = "web")]
        crate::dom::remove_preview();
        *self.preview.borrow_mut() = None;
    }
}
