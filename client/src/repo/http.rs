//! HTTP-backed repositories reading the dashboard list endpoints.
//!
//! Same trait surface as the in-memory dataset so views cannot tell the
//! two apart; swap this in once the backend grows list endpoints.

use api::types::{Assistant, UsageRecord, Website};
use async_trait::async_trait;

use super::{AssistantRepository, UsageRepository, WebsiteRepository};

/// Repositories reading `/api/websites`, `/api/assistants`, `/api/usage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRepositories;

async fn fetch_list<T: serde::de::DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("list request failed: {}", response.status()));
    }
    response.json().await.map_err(|err| err.to_string())
}

#[async_trait(?Send)]
impl WebsiteRepository for HttpRepositories {
    async fn list_websites(&self) -> Result<Vec<Website>, String> {
        fetch_list("/api/websites").await
    }
}

#[async_trait(?Send)]
impl AssistantRepository for HttpRepositories {
    async fn list_assistants(&self) -> Result<Vec<Assistant>, String> {
        fetch_list("/api/assistants").await
    }
}

#[async_trait(?Send)]
impl UsageRepository for HttpRepositories {
    async fn list_usage(&self) -> Result<Vec<UsageRecord>, String> {
        fetch_list("/api/usage").await
    }
}
