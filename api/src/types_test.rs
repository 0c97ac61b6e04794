use super::*;

#[test]
fn crawl_result_deserializes_backend_shape() {
    let raw = serde_json::json!({
        "id": "c-1",
        "website_url": "https://example.com",
        "content": {
            "title": "Example Website",
            "pages": [
                { "url": "https://example.com", "title": "Home Page", "content": "Main." }
            ],
            "faq": [
                { "question": "What do you do?", "answer": "Solutions." }
            ]
        }
    });

    let result: CrawlResult = serde_json::from_value(raw).unwrap();
    assert_eq!(result.id, "c-1");
    assert_eq!(result.content.title, "Example Website");
    assert_eq!(result.content.pages.len(), 1);
    assert_eq!(result.content.faq[0].question, "What do you do?");
}

#[test]
fn crawl_content_tolerates_missing_faq_and_pages() {
    let raw = serde_json::json!({
        "website_url": "https://example.com",
        "content": { "title": "Example Website" }
    });

    let result: CrawlResult = serde_json::from_value(raw).unwrap();
    assert!(result.id.is_empty());
    assert!(result.content.pages.is_empty());
    assert!(result.content.faq.is_empty());
}

#[test]
fn assistant_config_defaults_match_the_creator_form() {
    let config = AssistantConfig::default();
    assert_eq!(config.voice_id, "nova");
    assert_eq!(config.language, "en");
    assert_eq!(config.llm_model, "gpt-4o");
    assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    assert_eq!(config.max_response_duration, 120);
}

#[test]
fn generated_widget_ignores_extra_backend_fields() {
    let raw = serde_json::json!({
        "id": "w-1",
        "assistant_id": "a-1",
        "config": { "color": "#4F46E5", "position": "bottom-right", "cta_text": "Chat with me" },
        "iframe_code": "<script>run()</script>"
    });

    let generated: GeneratedWidget = serde_json::from_value(raw).unwrap();
    assert_eq!(generated.iframe_code, "<script>run()</script>");
}

#[test]
fn usage_record_round_trips() {
    let record = UsageRecord {
        id: "1".to_owned(),
        date: "2023-03-15".to_owned(),
        assistant_name: "Customer Support".to_owned(),
        website: "example.com".to_owned(),
        duration: 120,
        cost: 0.98,
    };
    let value = serde_json::to_value(&record).unwrap();
    let back: UsageRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}
