//! Launcher configuration shared by the dashboard and the extension.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Default launcher color used by forms and the example snippet.
pub const DEFAULT_COLOR: &str = "#4F46E5";

/// Literal call-to-action rendered when the configured text is blank.
pub const DEFAULT_CTA_TEXT: &str = "Chat with me";

/// Page corner the launcher button is anchored to.
///
/// Unrecognized wire values deserialize as bottom-right: the preview
/// contract treats an unknown corner as the documented fallback, not an
/// error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Position {
    /// Wire value for this corner, e.g. `"bottom-right"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
        }
    }

    /// Parse a wire value; `None` for unrecognized strings.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "bottom-right" => Some(Self::BottomRight),
            "bottom-left" => Some(Self::BottomLeft),
            "top-right" => Some(Self::TopRight),
            "top-left" => Some(Self::TopLeft),
            _ => None,
        }
    }

    /// Parse a wire value, falling back to bottom-right for anything
    /// unrecognized.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    /// Whether this corner anchors to the bottom page edge.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(self, Self::BottomRight | Self::BottomLeft)
    }

    /// Whether this corner anchors to the right page edge.
    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Self::BottomRight | Self::TopRight)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&raw))
    }
}

/// Launcher customization sent to `POST /api/widgets` and fed to the
/// preview renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Button color as a hex string, passed through uninterpreted to the
    /// styling layer.
    pub color: String,
    /// Corner the launcher is anchored to.
    #[serde(default)]
    pub position: Position,
    /// Button label; blank means the default call-to-action.
    #[serde(default)]
    pub cta_text: String,
    /// Circular avatar image; omitted from payloads entirely when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            position: Position::default(),
            cta_text: DEFAULT_CTA_TEXT.to_owned(),
            avatar_url: None,
        }
    }
}

impl WidgetConfig {
    /// Build a config from raw form fields. A blank avatar collapses to
    /// `None` so serialization omits the field instead of sending an
    /// empty string.
    #[must_use]
    pub fn from_form(color: &str, position: Position, cta_text: &str, avatar_url: &str) -> Self {
        let avatar = avatar_url.trim();
        Self {
            color: color.trim().to_owned(),
            position,
            cta_text: cta_text.to_owned(),
            avatar_url: (!avatar.is_empty()).then(|| avatar.to_owned()),
        }
    }

    /// Label rendered on the launcher: the CTA text, or the default when
    /// blank.
    #[must_use]
    pub fn label(&self) -> &str {
        let trimmed = self.cta_text.trim();
        if trimmed.is_empty() { DEFAULT_CTA_TEXT } else { trimmed }
    }
}
