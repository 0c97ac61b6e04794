//! Backend wire contract shared by the dashboard and the extension.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns every interesting behavior (crawling, assistant
//! provisioning, billing); this crate only mirrors its request/response
//! shapes, endpoint paths, and the error-body convention so both
//! surfaces stay in sync.

pub mod endpoints;
pub mod error;
pub mod types;

pub use types::{
    Assistant, AssistantConfig, CrawlContent, CrawlPage, CrawlResult, FaqEntry, GeneratedWidget,
    UsageRecord, Website,
};
