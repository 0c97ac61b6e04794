use std::cell::RefCell;

use super::*;
use crate::capabilities::SendError;

#[derive(Default)]
struct RecordingMessenger {
    sent: RefCell<Vec<Message>>,
    fail: bool,
}

impl Messenger for RecordingMessenger {
    fn send(&self, message: &Message) -> Result<(), SendError> {
        if self.fail {
            return Err(SendError::NoReceiver);
        }
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}

struct FixedTabs(Option<String>);

#[async_trait::async_trait(?Send)]
impl TabQuery for FixedTabs {
    async fn active_tab_url(&self) -> Option<String> {
        self.0.clone()
    }
}

#[test]
fn completed_navigation_pushes_url_updated() {
    let messenger = RecordingMessenger::default();
    on_tab_updated(&messenger, true, Some("https://example.com"));

    assert_eq!(
        messenger.sent.borrow().as_slice(),
        [Message::UrlUpdated { url: "https://example.com".to_owned() }]
    );
}

#[test]
fn incomplete_or_urlless_navigations_are_ignored() {
    let messenger = RecordingMessenger::default();
    on_tab_updated(&messenger, false, Some("https://example.com"));
    on_tab_updated(&messenger, true, None);
    on_tab_updated(&messenger, true, Some(""));

    assert!(messenger.sent.borrow().is_empty());
}

#[test]
fn send_failures_are_swallowed() {
    let messenger = RecordingMessenger { fail: true, ..RecordingMessenger::default() };
    // Must not panic or retry; the update is simply lost.
    on_tab_updated(&messenger, true, Some("https://example.com"));
    assert!(messenger.sent.borrow().is_empty());
}

#[test]
fn successive_navigations_send_in_order_most_recent_last() {
    let messenger = RecordingMessenger::default();
    on_tab_updated(&messenger, true, Some("https://a"));
    on_tab_updated(&messenger, true, Some("https://b"));

    let sent = messenger.sent.borrow();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1], Message::UrlUpdated { url: "https://b".to_owned() });
}

#[test]
fn current_url_query_reports_the_active_tab() {
    let reply = futures::executor::block_on(answer_current_url(&FixedTabs(Some(
        "https://example.com".to_owned(),
    ))));
    assert_eq!(reply.url.as_deref(), Some("https://example.com"));
}

#[test]
fn current_url_query_is_null_without_an_active_tab() {
    let reply = futures::executor::block_on(answer_current_url(&FixedTabs(None)));
    assert_eq!(reply.url, None);
}
