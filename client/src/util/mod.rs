//! Utility helpers shared across dashboard modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small pure modules isolated from page and component logic to improve
//! reuse and testability.

pub mod billing;
pub mod website_url;
