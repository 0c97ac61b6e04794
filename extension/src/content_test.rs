use std::cell::RefCell;

use super::*;
use crate::capabilities::SendError;
use widget::Position;

#[derive(Default)]
struct CellStore(RefCell<Option<String>>);

impl UrlStore for CellStore {
    fn set_current_url(&self, url: &str) {
        *self.0.borrow_mut() = Some(url.to_owned());
    }

    fn current_url(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

#[derive(Default)]
struct RecordingMessenger(RefCell<Vec<Message>>);

impl Messenger for RecordingMessenger {
    fn send(&self, message: &Message) -> Result<(), SendError> {
        self.0.borrow_mut().push(message.clone());
        Ok(())
    }
}

fn config(cta: &str) -> WidgetConfig {
    WidgetConfig::from_form("#4F46E5", Position::BottomRight, cta, "")
}

#[test]
fn url_updates_land_in_the_store_most_recent_wins() {
    let script = ContentScript::new(CellStore::default());
    script.handle(&Message::UrlUpdated { url: "https://a".to_owned() });
    script.handle(&Message::UrlUpdated { url: "https://b".to_owned() });

    assert_eq!(script.current_url().as_deref(), Some("https://b"));
}

#[test]
fn repeated_previews_leave_exactly_one_overlay() {
    let script = ContentScript::new(CellStore::default());
    script.handle(&Message::PreviewWidget { config: config("First") });
    script.handle(&Message::PreviewWidget { config: config("Second") });

    let active = script.active_preview().expect("one preview active");
    assert_eq!(active.label, "Second");
}

#[test]
fn remove_preview_clears_the_overlay() {
    let script = ContentScript::new(CellStore::default());
    script.handle(&Message::PreviewWidget { config: config("First") });
    script.handle(&Message::RemovePreview);

    assert_eq!(script.active_preview(), None);
}

#[test]
fn remove_preview_without_a_preview_is_a_no_op() {
    let script = ContentScript::new(CellStore::default());
    script.handle(&Message::RemovePreview);
    assert_eq!(script.active_preview(), None);
}

#[test]
fn unrelated_messages_are_ignored() {
    let script = ContentScript::new(CellStore::default());
    script.handle(&Message::GetCurrentUrl);
    script.handle(&Message::ContentScriptLoaded);

    assert_eq!(script.current_url(), None);
    assert_eq!(script.active_preview(), None);
}

#[test]
fn announce_sends_the_loaded_message() {
    let script = ContentScript::new(CellStore::default());
    let messenger = RecordingMessenger::default();
    script.announce_loaded(&messenger);

    assert_eq!(messenger.0.borrow().as_slice(), [Message::ContentScriptLoaded]);
}
