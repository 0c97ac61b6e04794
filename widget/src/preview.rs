//! Pure render plan for the non-interactive launcher preview.
//!
//! DESIGN
//! ======
//! Planning is separated from DOM application so corner anchoring, the
//! label fallback, and tooltip placement stay unit-testable outside a
//! browser. The extension's content script and the dashboard's preview
//! pane both consume the same plan.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::config::{Position, WidgetConfig};

/// Element id of the injected preview container. Rendering removes any
/// existing node with this id before inserting, so at most one mock
/// overlay exists per page.
pub const PREVIEW_CONTAINER_ID: &str = "voicelet-widget-preview";

/// Inset from the two anchored page edges, in pixels.
pub const EDGE_INSET_PX: u32 = 20;

/// How long the "Preview Mode" tooltip stays visible after a click.
pub const TOOLTIP_VISIBLE_MS: u32 = 2000;

/// Stacking order of the injected container.
pub const PREVIEW_Z_INDEX: &str = "9999";

/// CSS `(property, value)` pair applied to the container or tooltip.
pub type CssOffset = (&'static str, String);

/// Everything a styling layer needs to draw one launcher mockup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewPlan {
    /// Corner the mockup is anchored to.
    pub position: Position,
    /// Hex color, passed through uninterpreted.
    pub color: String,
    /// Button label after the blank-CTA fallback.
    pub label: String,
    /// Avatar image to render instead of the mic glyph, when present.
    pub avatar_url: Option<String>,
    /// Tooltip lifetime in milliseconds.
    pub tooltip_visible_ms: u32,
}

impl PreviewPlan {
    /// Plan a preview for a launcher config.
    #[must_use]
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            position: config.position,
            color: config.color.clone(),
            label: config.label().to_owned(),
            avatar_url: config.avatar_url.clone(),
            tooltip_visible_ms: TOOLTIP_VISIBLE_MS,
        }
    }

    /// Container offsets: a fixed inset on both edges of the chosen corner.
    #[must_use]
    pub fn anchor_offsets(&self) -> [CssOffset; 2] {
        let inset = format!("{EDGE_INSET_PX}px");
        [
            (vertical_edge(self.position), inset.clone()),
            (horizontal_edge(self.position), inset),
        ]
    }

    /// Tooltip offsets: same side as the button, lifted clear of it.
    /// Bottom corners place the tooltip above the button, top corners
    /// below; the horizontal edge hugs the button's outer edge.
    #[must_use]
    pub fn tooltip_offsets(&self) -> [CssOffset; 2] {
        [
            (vertical_edge(self.position), "50px".to_owned()),
            (horizontal_edge(self.position), "0".to_owned()),
        ]
    }
}

fn vertical_edge(position: Position) -> &'static str {
    if position.is_bottom() { "bottom" } else { "top" }
}

fn horizontal_edge(position: Position) -> &'static str {
    if position.is_right() { "right" } else { "left" }
}
