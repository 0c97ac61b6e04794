//! Backend REST calls for the three dashboard operations.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures resolve to the backend's `detail` string when present, else
//! the fixed per-call fallback, and flow into component state; no
//! retries, and every form stays re-submittable.

#![allow(clippy::unused_async)]

use api::error::{ASSISTANT_FALLBACK, CRAWL_FALLBACK, WIDGET_FALLBACK};
use api::types::{Assistant, AssistantConfig, CrawlResult, GeneratedWidget};
use widget::WidgetConfig;

/// Analyze a website via `POST /api/crawl`.
///
/// # Errors
///
/// Backend `detail` verbatim when present, else [`CRAWL_FALLBACK`].
pub async fn crawl_website(website_url: &str) -> Result<CrawlResult, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(api::endpoints::CRAWL, &api::endpoints::crawl_body(website_url), CRAWL_FALLBACK)
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = website_url;
        Err(CRAWL_FALLBACK.to_owned())
    }
}

/// Provision an assistant via `POST /api/assistants`.
///
/// # Errors
///
/// Backend `detail` verbatim when present, else [`ASSISTANT_FALLBACK`].
pub async fn create_assistant(
    website_id: &str,
    config: &AssistantConfig,
) -> Result<Assistant, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            api::endpoints::ASSISTANTS,
            &api::endpoints::assistant_body(website_id, config),
            ASSISTANT_FALLBACK,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (website_id, config);
        Err(ASSISTANT_FALLBACK.to_owned())
    }
}

/// Generate the embed snippet via `POST /api/widgets`.
///
/// The config must be sanitized already (blank avatar as `None`) so the
/// payload omits the field.
///
/// # Errors
///
/// Backend `detail` verbatim when present, else [`WIDGET_FALLBACK`].
pub async fn generate_widget(
    assistant_id: &str,
    config: &WidgetConfig,
) -> Result<GeneratedWidget, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            api::endpoints::WIDGETS,
            &api::endpoints::widget_body(assistant_id, config),
            WIDGET_FALLBACK,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (assistant_id, config);
        Err(WIDGET_FALLBACK.to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
    fallback: &str,
) -> Result<T, String> {
    let request = gloo_net::http::Request::post(path)
        .json(body)
        .map_err(|_| fallback.to_owned())?;
    let response = request.send().await.map_err(|_| fallback.to_owned())?;
    let text = response.text().await.unwrap_or_default();
    if !response.ok() {
        return Err(api::error::error_detail(&text, fallback));
    }
    serde_json::from_str(&text).map_err(|_| fallback.to_owned())
}
