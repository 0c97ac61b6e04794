use super::*;

#[test]
fn position_wire_values_round_trip() {
    for (position, wire) in [
        (Position::BottomRight, "bottom-right"),
        (Position::BottomLeft, "bottom-left"),
        (Position::TopRight, "top-right"),
        (Position::TopLeft, "top-left"),
    ] {
        assert_eq!(position.as_str(), wire);
        assert_eq!(serde_json::to_value(position).unwrap(), serde_json::json!(wire));
        let parsed: Position = serde_json::from_value(serde_json::json!(wire)).unwrap();
        assert_eq!(parsed, position);
    }
}

#[test]
fn unrecognized_position_falls_back_to_bottom_right() {
    assert_eq!(Position::parse_or_default("center"), Position::BottomRight);
    assert_eq!(Position::parse_or_default(""), Position::BottomRight);
    assert_eq!(Position::parse("center"), None);

    let parsed: Position = serde_json::from_value(serde_json::json!("middle-out")).unwrap();
    assert_eq!(parsed, Position::BottomRight);
}

#[test]
fn from_form_drops_blank_avatar() {
    let config = WidgetConfig::from_form("#112233", Position::TopLeft, "Talk to us", "");
    assert_eq!(config.avatar_url, None);

    let config = WidgetConfig::from_form("#112233", Position::TopLeft, "Talk to us", "   ");
    assert_eq!(config.avatar_url, None);

    let config =
        WidgetConfig::from_form("#112233", Position::TopLeft, "Talk to us", " https://a/b.png ");
    assert_eq!(config.avatar_url.as_deref(), Some("https://a/b.png"));
}

#[test]
fn serialization_omits_absent_avatar_field() {
    let config = WidgetConfig::from_form("#4F46E5", Position::BottomRight, "Chat with me", "");
    let value = serde_json::to_value(&config).unwrap();
    assert!(value.get("avatar_url").is_none());

    let config =
        WidgetConfig::from_form("#4F46E5", Position::BottomRight, "Chat with me", "https://a/p.png");
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["avatar_url"], serde_json::json!("https://a/p.png"));
}

#[test]
fn label_defaults_when_cta_is_blank() {
    let mut config = WidgetConfig::default();
    config.cta_text = String::new();
    assert_eq!(config.label(), DEFAULT_CTA_TEXT);

    config.cta_text = "   ".to_owned();
    assert_eq!(config.label(), DEFAULT_CTA_TEXT);

    config.cta_text = " Ask me anything ".to_owned();
    assert_eq!(config.label(), "Ask me anything");
}

#[test]
fn malformed_color_is_passed_through_uninterpreted() {
    let config = WidgetConfig::from_form("not-a-color", Position::BottomRight, "", "");
    assert_eq!(config.color, "not-a-color");
}
