//! Backend HTTP calls made from the popup.
//!
//! The popup does not run on the dashboard origin, so every call targets
//! an absolute backend base URL. Errors resolve to the backend's `detail`
//! message when present, else the popup's fixed fallback; no retries.

#![allow(clippy::unused_async)]

use api::types::CrawlResult;

/// Default backend origin used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Fixed fallback when analyzing fails without a backend `detail`.
pub const ANALYZE_FALLBACK: &str =
    "Failed to analyze website. Please check the URL and try again.";

/// Analyze `website_url` via `POST {base}/api/crawl`.
///
/// # Errors
///
/// Returns the backend's `detail` message verbatim when present, else
/// [`ANALYZE_FALLBACK`].
pub async fn post_crawl(base: &str, website_url: &str) -> Result<CrawlResult, String> {
    #[cfg(feature = "web")]
    {
        let url = api::endpoints::join(base, api::endpoints::CRAWL);
        let request = gloo_net::http::Request::post(&url)
            .json(&api::endpoints::crawl_body(website_url))
            .map_err(|_| ANALYZE_FALLBACK.to_owned())?;
        let response = request.send().await.map_err(|_| ANALYZE_FALLBACK.to_owned())?;
        let body = response.text().await.unwrap_or_default();
        if !response.ok() {
            return Err(api::error::error_detail(&body, ANALYZE_FALLBACK));
        }
        serde_json::from_str(&body).map_err(|_| ANALYZE_FALLBACK.to_owned())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (base, website_url);
        Err("not available outside the browser".to_owned())
    }
}
