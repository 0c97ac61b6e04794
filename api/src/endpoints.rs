//! Endpoint paths and request bodies for the backend HTTP surface.
//!
//! Request bodies are built here instead of inline at call sites so both
//! surfaces serialize identical payloads.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde_json::{Value, json};
use widget::WidgetConfig;

use crate::types::AssistantConfig;

/// `POST`: analyze a website and extract its content.
pub const CRAWL: &str = "/api/crawl";

/// `POST`: provision a voice assistant for an analyzed website.
pub const ASSISTANTS: &str = "/api/assistants";

/// `POST`: generate the embeddable launcher for an assistant.
pub const WIDGETS: &str = "/api/widgets";

/// Join a path onto an absolute backend base, tolerating a trailing slash.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Body for [`CRAWL`].
#[must_use]
pub fn crawl_body(website_url: &str) -> Value {
    json!({ "website_url": website_url })
}

/// Body for [`ASSISTANTS`].
#[must_use]
pub fn assistant_body(website_id: &str, config: &AssistantConfig) -> Value {
    json!({ "website_id": website_id, "config": config })
}

/// Body for [`WIDGETS`]. The config is expected to be sanitized already:
/// a blank avatar must arrive as `None` so the field is omitted from the
/// payload rather than sent as an empty string.
#[must_use]
pub fn widget_body(assistant_id: &str, config: &WidgetConfig) -> Value {
    json!({ "assistant_id": assistant_id, "config": config })
}
