//! Popup flow state: detect tab URL, analyze, create, generate.
//!
//! DESIGN
//! ======
//! The step machine and summaries are plain data so the flow is
//! unit-testable natively; the Leptos component in `popup_app` only
//! renders the current step and forwards intents.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use api::types::CrawlResult;

use crate::capabilities::TabQuery;

/// Placeholder shown when no extension tab context is available.
pub const PLACEHOLDER_URL: &str = "https://example.com";

/// How long the mocked assistant-creation step spins before completing.
pub const CREATE_SPINNER_MS: u32 = 1500;

/// Screens of the popup flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupStep {
    /// URL display plus the analyze action.
    #[default]
    Initial,
    /// Crawl request in flight.
    Analyzing,
    /// Crawl summary plus the create-assistant action.
    Results,
    /// Mock assistant creation in flight.
    Creating,
    /// Assistant summary plus the generate-widget action.
    AssistantReady,
    /// Example embed snippet with a copy action.
    WidgetReady,
}

/// Resolve the URL the popup starts with.
///
/// Outside an extension context (no answer from the tab query) this
/// silently degrades to a fixed placeholder instead of failing.
pub async fn resolve_start_url(tabs: &dyn TabQuery) -> String {
    tabs.active_tab_url()
        .await
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_URL.to_owned())
}

/// Summary lines for the results screen.
#[must_use]
pub fn content_summary(result: &CrawlResult) -> Vec<(&'static str, String)> {
    vec![
        ("Website", result.website_url.clone()),
        ("Title", result.content.title.clone()),
        ("Pages", result.content.pages.len().to_string()),
        ("FAQs", result.content.faq.len().to_string()),
    ]
}

/// Fixed summary shown on the assistant step of the mockup flow.
#[must_use]
pub fn demo_assistant_summary() -> [(&'static str, &'static str); 4] {
    [
        ("Name", "Website Assistant"),
        ("Voice", "Nova (Female)"),
        ("Language", "English"),
        ("Model", "GPT-4o"),
    ]
}

/// Example snippet shown on the widget step.
#[must_use]
pub fn demo_widget_snippet() -> String {
    widget::embed::example_embed_snippet(
        "public_key_123",
        "vapi_123456",
        &widget::WidgetConfig::default(),
    )
}
