//! Pluggable data sources for dashboard lists.
//!
//! DESIGN
//! ======
//! Views read websites, assistants, and usage through these traits so the
//! same rendering logic runs against the fixed in-memory dataset and an
//! HTTP-backed source. Futures are `?Send`: everything runs on the
//! single-threaded browser executor.

pub mod memory;

#[cfg(feature = "hydrate")]
pub mod http;

use std::rc::Rc;

use api::types::{Assistant, UsageRecord, Website};
use async_trait::async_trait;

/// Websites the account has analyzed.
#[async_trait(?Send)]
pub trait WebsiteRepository {
    async fn list_websites(&self) -> Result<Vec<Website>, String>;
}

/// Assistants provisioned for the account.
#[async_trait(?Send)]
pub trait AssistantRepository {
    async fn list_assistants(&self) -> Result<Vec<Assistant>, String>;
}

/// Metered conversations for the account.
#[async_trait(?Send)]
pub trait UsageRepository {
    async fn list_usage(&self) -> Result<Vec<UsageRecord>, String>;
}

/// Bundle of data sources provided to the view tree via context.
#[derive(Clone)]
pub struct Repositories {
    pub websites: Rc<dyn WebsiteRepository>,
    pub assistants: Rc<dyn AssistantRepository>,
    pub usage: Rc<dyn UsageRepository>,
}

impl Repositories {
    /// The fixed demo dataset every fresh account sees.
    #[must_use]
    pub fn demo() -> Self {
        let shared = Rc::new(memory::MemoryRepositories::demo());
        Self { websites: shared.clone(), assistants: shared.clone(), usage: shared }
    }
}
