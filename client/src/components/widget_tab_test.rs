use super::*;
use api::types::AssistantConfig;

fn assistant() -> Assistant {
    Assistant {
        id: "789".to_owned(),
        website_id: "123".to_owned(),
        config: AssistantConfig { name: "Customer Support".to_owned(), ..AssistantConfig::default() },
    }
}

fn website() -> Website {
    Website {
        id: "123".to_owned(),
        url: "example.com".to_owned(),
        title: "Example Website".to_owned(),
    }
}

#[test]
fn assistant_options_include_the_website_when_known() {
    assert_eq!(
        assistant_option_label(&assistant(), &[website()]),
        "Customer Support (example.com)"
    );
    assert_eq!(assistant_option_label(&assistant(), &[]), "Customer Support");
}

#[test]
fn form_requires_a_selected_assistant() {
    assert_eq!(validate_widget_form(""), Err("Select an assistant first."));
    assert_eq!(validate_widget_form("789"), Ok(()));
}

#[test]
fn preview_styles_anchor_each_corner_with_the_fixed_inset() {
    let cases = [
        ("bottom-right", "position:absolute;bottom:20px;right:20px"),
        ("bottom-left", "position:absolute;bottom:20px;left:20px"),
        ("top-right", "position:absolute;top:20px;right:20px"),
        ("top-left", "position:absolute;top:20px;left:20px"),
    ];
    for (raw, expected) in cases {
        let config =
            WidgetConfig::from_form("#4F46E5", Position::parse_or_default(raw), "Chat with me", "");
        let plan = PreviewPlan::from_config(&config);
        assert_eq!(preview_container_style(&plan), expected);
    }
}

#[test]
fn unknown_positions_preview_at_bottom_right() {
    let config = WidgetConfig::from_form(
        "#4F46E5",
        Position::parse_or_default("floating"),
        "Chat with me",
        "",
    );
    let plan = PreviewPlan::from_config(&config);
    assert_eq!(preview_container_style(&plan), "position:absolute;bottom:20px;right:20px");
}

#[test]
fn button_style_passes_the_color_through_uninterpreted() {
    let config = WidgetConfig::from_form("#123abc", Position::BottomRight, "", "");
    assert_eq!(preview_button_style(&PreviewPlan::from_config(&config)), "background-color:#123abc");

    let config = WidgetConfig::from_form("tomato", Position::BottomRight, "", "");
    assert_eq!(preview_button_style(&PreviewPlan::from_config(&config)), "background-color:tomato");
}

#[test]
fn blank_avatar_is_omitted_from_the_submitted_payload() {
    let config = WidgetConfig::from_form("#4F46E5", Position::BottomRight, "Chat with me", "  ");
    let body = api::endpoints::widget_body("789", &config);
    assert!(body["config"].get("avatar_url").is_none());
    assert_eq!(body["config"]["cta_text"], "Chat with me");
}
