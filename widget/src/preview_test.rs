use super::*;
use crate::config::DEFAULT_CTA_TEXT;

fn plan_for(position: &str) -> PreviewPlan {
    let config: WidgetConfig = serde_json::from_value(serde_json::json!({
        "color": "#4F46E5",
        "position": position,
        "cta_text": "Chat with me",
    }))
    .unwrap();
    PreviewPlan::from_config(&config)
}

#[test]
fn anchors_each_corner_with_fixed_inset() {
    let cases = [
        ("bottom-right", [("bottom", "20px"), ("right", "20px")]),
        ("bottom-left", [("bottom", "20px"), ("left", "20px")]),
        ("top-right", [("top", "20px"), ("right", "20px")]),
        ("top-left", [("top", "20px"), ("left", "20px")]),
    ];
    for (position, expected) in cases {
        let offsets = plan_for(position).anchor_offsets();
        for ((prop, value), (expected_prop, expected_value)) in offsets.iter().zip(expected) {
            assert_eq!(*prop, expected_prop, "position {position}");
            assert_eq!(value, expected_value, "position {position}");
        }
    }
}

#[test]
fn unknown_position_anchors_bottom_right() {
    let offsets = plan_for("somewhere-else").anchor_offsets();
    assert_eq!(offsets[0].0, "bottom");
    assert_eq!(offsets[1].0, "right");
}

#[test]
fn tooltip_sits_on_the_same_side_as_the_button() {
    let cases = [
        ("bottom-right", [("bottom", "50px"), ("right", "0")]),
        ("bottom-left", [("bottom", "50px"), ("left", "0")]),
        ("top-right", [("top", "50px"), ("right", "0")]),
        ("top-left", [("top", "50px"), ("left", "0")]),
    ];
    for (position, expected) in cases {
        let offsets = plan_for(position).tooltip_offsets();
        for ((prop, value), (expected_prop, expected_value)) in offsets.iter().zip(expected) {
            assert_eq!(*prop, expected_prop, "position {position}");
            assert_eq!(value, expected_value, "position {position}");
        }
    }
}

#[test]
fn tooltip_lifetime_is_two_seconds() {
    assert_eq!(plan_for("bottom-right").tooltip_visible_ms, 2000);
    assert_eq!(TOOLTIP_VISIBLE_MS, 2000);
}

#[test]
fn plan_applies_label_fallback_and_keeps_color_verbatim() {
    let config = WidgetConfig::from_form("hot pink", Position::TopLeft, "  ", "");
    let plan = PreviewPlan::from_config(&config);
    assert_eq!(plan.label, DEFAULT_CTA_TEXT);
    assert_eq!(plan.color, "hot pink");
    assert_eq!(plan.avatar_url, None);
}
