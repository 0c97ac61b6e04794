//! Backend error-body convention.
//!
//! Error responses are expected to carry a human-readable `detail` field.
//! Call sites surface it verbatim and fall back to a fixed message when
//! it is missing or the body is not JSON at all.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fixed fallback for `POST /api/crawl` failures.
pub const CRAWL_FALLBACK: &str = "Invalid URL or crawling failed";

/// Fixed fallback for `POST /api/assistants` failures.
pub const ASSISTANT_FALLBACK: &str = "Failed to create assistant";

/// Fixed fallback for `POST /api/widgets` failures.
pub const WIDGET_FALLBACK: &str = "Failed to generate widget";

/// Extract `detail` from an error body, else return `fallback`.
#[must_use]
pub fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}
