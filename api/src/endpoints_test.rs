use super::*;
use widget::Position;

#[test]
fn join_tolerates_trailing_slash() {
    assert_eq!(join("http://localhost:8001", CRAWL), "http://localhost:8001/api/crawl");
    assert_eq!(join("http://localhost:8001/", CRAWL), "http://localhost:8001/api/crawl");
}

#[test]
fn crawl_body_wraps_the_url() {
    assert_eq!(
        crawl_body("https://example.com"),
        serde_json::json!({ "website_url": "https://example.com" })
    );
}

#[test]
fn assistant_body_nests_the_config() {
    let config = AssistantConfig { name: "Support".to_owned(), ..AssistantConfig::default() };
    let body = assistant_body("123", &config);
    assert_eq!(body["website_id"], "123");
    assert_eq!(body["config"]["name"], "Support");
    assert_eq!(body["config"]["voice_id"], "nova");
    assert_eq!(body["config"]["max_response_duration"], 120);
}

#[test]
fn widget_body_omits_blank_avatar_entirely() {
    let config = WidgetConfig::from_form("#4F46E5", Position::BottomLeft, "Chat with me", "");
    let body = widget_body("789", &config);
    assert_eq!(body["assistant_id"], "789");
    assert_eq!(body["config"]["position"], "bottom-left");
    assert!(body["config"].get("avatar_url").is_none());
}
