//! Serde DTOs mirroring backend payloads.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend's response bodies so
//! serde round-trips stay lossless. Nothing here validates or
//! reinterprets data; the backend is the sole authority on its contents.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A previously analyzed website, opaque beyond display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    /// Backend-assigned identifier.
    pub id: String,
    /// Address the site was analyzed under.
    pub url: String,
    /// Display title extracted during analysis.
    pub title: String,
}

/// One extracted page from a crawl.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlPage {
    pub url: String,
    pub title: String,
    pub content: String,
}

/// A question/answer pair extracted by the crawler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Extracted site content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlContent {
    /// Site-level title.
    pub title: String,
    #[serde(default)]
    pub pages: Vec<CrawlPage>,
    /// FAQ pairs; the backend may omit the field entirely.
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

/// Response of `POST /api/crawl`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// Backend-assigned crawl identifier, usable as a website id when
    /// creating an assistant.
    #[serde(default)]
    pub id: String,
    pub website_url: String,
    pub content: CrawlContent,
}

/// User-edited assistant settings, sent verbatim to the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub name: String,
    pub system_prompt: String,
    pub voice_id: String,
    pub language: String,
    pub llm_model: String,
    /// Sampling temperature the form constrains to `0..=1`.
    pub temperature: f64,
    /// Response cap in seconds the form constrains to `10..=300`.
    pub max_response_duration: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            system_prompt: "You are a helpful assistant for this website. Answer user \
                            questions accurately based on the website content."
                .to_owned(),
            voice_id: "nova".to_owned(),
            language: "en".to_owned(),
            llm_model: "gpt-4o".to_owned(),
            temperature: 0.7,
            max_response_duration: 120,
        }
    }
}

/// A provisioned voice assistant. Immutable from the UI's perspective
/// once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assistant {
    pub id: String,
    /// Website whose content the assistant answers from.
    pub website_id: String,
    pub config: AssistantConfig,
}

/// Response of `POST /api/widgets`. Only the embed code is consumed; the
/// UI displays it verbatim and never parses it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedWidget {
    pub iframe_code: String,
}

/// One metered conversation, read-only for display and summation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    #[serde(default)]
    pub id: String,
    /// Calendar date of the conversation, as reported by the backend.
    pub date: String,
    pub assistant_name: String,
    pub website: String,
    /// Conversation length in seconds.
    pub duration: u32,
    /// Charged amount in USD, authoritative on the backend.
    pub cost: f64,
}
