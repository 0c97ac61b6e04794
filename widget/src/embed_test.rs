use super::*;
use crate::config::Position;

#[test]
fn snippet_carries_key_assistant_and_button_config() {
    let config = WidgetConfig::from_form("#4F46E5", Position::BottomRight, "Chat with me", "");
    let snippet = example_embed_snippet("public_key_123", "vapi_123456", &config);

    assert!(snippet.contains(r#"const assistant = "vapi_123456";"#));
    assert!(snippet.contains(r#"const apiKey = "public_key_123";"#));
    assert!(snippet.contains(LOADER_SRC));
    assert!(snippet.contains(r#"position: "bottom-right""#));
    assert!(snippet.contains(r##"color: "#4F46E5""##));
}

#[test]
fn snippet_is_a_single_script_tag() {
    let snippet =
        example_embed_snippet("public_key_123", "vapi_123456", &WidgetConfig::default());
    assert!(snippet.starts_with("<!-- Voicelet Widget -->\n<script>"));
    assert!(snippet.ends_with("</script>"));
    assert_eq!(snippet.matches("<script>").count(), 1);
}

#[test]
fn snippet_reflects_the_chosen_corner() {
    let config = WidgetConfig::from_form("#111111", Position::TopLeft, "", "");
    let snippet = example_embed_snippet("k", "a", &config);
    assert!(snippet.contains(r#"position: "top-left""#));
}
