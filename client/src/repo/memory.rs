//! Fixed in-memory dataset driving the dashboard before real list
//! endpoints exist; doubles as the test seam for view logic.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use api::types::{Assistant, AssistantConfig, UsageRecord, Website};
use async_trait::async_trait;

use super::{AssistantRepository, UsageRepository, WebsiteRepository};

/// In-memory repository serving a canned account snapshot.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepositories {
    pub websites: Vec<Website>,
    pub assistants: Vec<Assistant>,
    pub usage: Vec<UsageRecord>,
}

impl MemoryRepositories {
    /// Demo dataset: two analyzed sites, one assistant, three usage rows.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            websites: vec![
                Website {
                    id: "123".to_owned(),
                    url: "example.com".to_owned(),
                    title: "Example Website".to_owned(),
                },
                Website {
                    id: "456".to_owned(),
                    url: "mysite.com".to_owned(),
                    title: "My Site".to_owned(),
                },
            ],
            assistants: vec![Assistant {
                id: "789".to_owned(),
                website_id: "123".to_owned(),
                config: AssistantConfig {
                    name: "Customer Support".to_owned(),
                    ..AssistantConfig::default()
                },
            }],
            usage: vec![
                UsageRecord {
                    id: "1".to_owned(),
                    date: "2023-03-15".to_owned(),
                    assistant_name: "Customer Support".to_owned(),
                    website: "example.com".to_owned(),
                    duration: 120,
                    cost: 0.98,
                },
                UsageRecord {
                    id: "2".to_owned(),
                    date: "2023-03-14".to_owned(),
                    assistant_name: "Customer Support".to_owned(),
                    website: "example.com".to_owned(),
                    duration: 450,
                    cost: 3.68,
                },
                UsageRecord {
                    id: "3".to_owned(),
                    date: "2023-03-12".to_owned(),
                    assistant_name: "Sales Assistant".to_owned(),
                    website: "mysite.com".to_owned(),
                    duration: 1080,
                    cost: 8.82,
                },
            ],
        }
    }
}

#[async_trait(?Send)]
impl WebsiteRepository for MemoryRepositories {
    async fn list_websites(&self) -> Result<Vec<Website>, String> {
        Ok(self.websites.clone())
    }
}

#[async_trait(?Send)]
impl AssistantRepository for MemoryRepositories {
    async fn list_assistants(&self) -> Result<Vec<Assistant>, String> {
        Ok(self.assistants.clone())
    }
}

#[async_trait(?Send)]
impl UsageRepository for MemoryRepositories {
    async fn list_usage(&self) -> Result<Vec<UsageRecord>, String> {
        Ok(self.usage.clone())
    }
}
