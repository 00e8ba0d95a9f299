//! Response cache collaborator for expensive external calls (LLM completions).
//!
//! The cache is always injected by the caller and keyed by a content hash of the
//! prompt pair. Nothing in this crate keeps a process-wide cache.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use serde_json::json;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::errors::CoreError;

/// Hex SHA-256 of the canonical JSON form of a prompt pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(prompt: &str, system_prompt: Option<&str>) -> Self {
        let canonical = json!({
            "prompt": prompt,
            "system_prompt": system_prompt.unwrap_or_default(),
        })
        .to_string();
        Self(hex::encode(Sha256::digest(canonical.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CoreError>;
    async fn put(&self, key: CacheKey, response: String) -> Result<(), CoreError>;
}

/// Process-local cache owned by whoever constructs it.
#[derive(Debug, Default)]
pub struct InMemoryResponseCache {
    entries: RwLock<HashMap<CacheKey, String>>,
}

impl InMemoryResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl ResponseCache for InMemoryResponseCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: CacheKey, response: String) -> Result<(), CoreError> {
        self.entries.write().await.insert(key, response);
        Ok(())
    }
}

/// Returns the cached response for the prompt pair, or awaits `fetch`, stores its
/// result and returns it. Cache failures never fail the call; they are logged.
pub async fn get_or_insert_with<F, Fut, E>(
    cache: &dyn ResponseCache,
    prompt: &str,
    system_prompt: Option<&str>,
    fetch: F,
) -> Result<String, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, E>>,
{
    let key = CacheKey::new(prompt, system_prompt);

    match cache.get(&key).await {
        Ok(Some(hit)) => {
            debug!("Response cache hit: {}", key.as_str());
            return Ok(hit);
        }
        Ok(None) => {}
        Err(e) => warn!("Response cache lookup failed, bypassing: {e}"),
    }

    let response = fetch().await?;

    if let Err(e) = cache.put(key, response.clone()).await {
        warn!("Response cache store failed: {e}");
    }

    Ok(response)
}
