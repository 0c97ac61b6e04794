use super::*;

#[test]
fn detail_field_is_surfaced_verbatim() {
    assert_eq!(error_detail(r#"{"detail":"Invalid URL"}"#, CRAWL_FALLBACK), "Invalid URL");
    assert_eq!(
        error_detail(r#"{"detail":"Assistant not found"}"#, WIDGET_FALLBACK),
        "Assistant not found"
    );
}

#[test]
fn missing_detail_uses_the_fixed_fallback() {
    assert_eq!(error_detail(r#"{"message":"nope"}"#, WIDGET_FALLBACK), "Failed to generate widget");
    assert_eq!(error_detail("{}", ASSISTANT_FALLBACK), "Failed to create assistant");
}

#[test]
fn non_json_bodies_use_the_fixed_fallback() {
    assert_eq!(error_detail("<html>502</html>", CRAWL_FALLBACK), "Invalid URL or crawling failed");
    assert_eq!(error_detail("", WIDGET_FALLBACK), "Failed to generate widget");
}

#[test]
fn non_string_detail_uses_the_fixed_fallback() {
    assert_eq!(error_detail(r#"{"detail":{"code":400}}"#, CRAWL_FALLBACK), CRAWL_FALLBACK);
}
