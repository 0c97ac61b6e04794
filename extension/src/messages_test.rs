use super::*;
use widget::Position;

#[test]
fn messages_use_the_expected_wire_tags() {
    let cases = [
        (Message::UrlUpdated { url: "https://a".to_owned() }, "URL_UPDATED"),
        (Message::GetCurrentUrl, "GET_CURRENT_URL"),
        (Message::RemovePreview, "REMOVE_PREVIEW"),
        (Message::ContentScriptLoaded, "CONTENT_SCRIPT_LOADED"),
    ];
    for (message, tag) in cases {
        let value: serde_json::Value =
            serde_json::from_str(&encode_message(&message).unwrap()).unwrap();
        assert_eq!(value["type"], tag);
    }
}

#[test]
fn url_updated_round_trips() {
    let message = Message::UrlUpdated { url: "https://example.com/docs".to_owned() };
    let raw = encode_message(&message).unwrap();
    assert_eq!(decode_message(&raw).unwrap(), message);
}

#[test]
fn preview_widget_carries_the_config_without_blank_avatar() {
    let config = WidgetConfig::from_form("#4F46E5", Position::TopRight, "Chat with me", "");
    let raw = encode_message(&Message::PreviewWidget { config }).unwrap();

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["type"], "PREVIEW_WIDGET");
    assert_eq!(value["config"]["position"], "top-right");
    assert!(value["config"].get("avatar_url").is_none());
}

#[test]
fn unknown_tags_fail_to_decode() {
    assert!(decode_message(r#"{"type":"SELF_DESTRUCT"}"#).is_err());
    assert!(decode_message("not json").is_err());
}

#[test]
fn current_url_reply_serializes_null_for_no_tab() {
    let reply = CurrentUrlReply { url: None };
    assert_eq!(serde_json::to_value(&reply).unwrap(), serde_json::json!({ "url": null }));

    let reply = CurrentUrlReply { url: Some("https://a".to_owned()) };
    assert_eq!(serde_json::to_value(&reply).unwrap(), serde_json::json!({ "url": "https://a" }));
}
