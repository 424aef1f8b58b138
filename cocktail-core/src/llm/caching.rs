//! Disk cache in front of any LlmProvider.
//!
//! Generated suggestions are stored as one JSON file per prompt under
//! `<cache_dir>/<provider>/<model>/<sha256-prefix>.json`. Asking the same model
//! the same question again is served from disk.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// One cached completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    provider: String,
    model: String,
    prompt_hash: String,
    cached_at: DateTime<Utc>,
    response: String,
}

/// Cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub cached_responses: usize,
}

#[derive(Debug)]
pub struct CachingProvider {
    inner: Box<dyn LlmProvider>,
    cache_dir: PathBuf,
}

impl CachingProvider {
    pub fn new(inner: Box<dyn LlmProvider>, cache_dir: PathBuf) -> Self {
        Self { inner, cache_dir }
    }

    /// First 16 bytes of the prompt's SHA-256, hex encoded.
    fn prompt_hash(prompt: &str) -> String {
        let digest = Sha256::digest(prompt.as_bytes());
        hex::encode(&digest[..16])
    }

    fn model_dir(&self) -> PathBuf {
        self.cache_dir
            .join(self.inner.provider_name())
            .join(self.inner.model_name().replace(['/', ':'], "_"))
    }

    fn entry_path(&self, prompt_hash: &str) -> PathBuf {
        self.model_dir().join(format!("{}.json", prompt_hash))
    }

    fn read_entry(path: &Path) -> Option<CacheEntry> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn write_entry(&self, prompt_hash: &str, response: &str) -> Result<(), LlmError> {
        fs::create_dir_all(self.model_dir()).map_err(|e| LlmError::CacheError(e.to_string()))?;

        let entry = CacheEntry {
            provider: self.inner.provider_name().to_string(),
            model: self.inner.model_name().to_string(),
            prompt_hash: prompt_hash.to_string(),
            cached_at: Utc::now(),
            response: response.to_string(),
        };
        let content =
            serde_json::to_string_pretty(&entry).map_err(|e| LlmError::CacheError(e.to_string()))?;

        fs::write(self.entry_path(prompt_hash), content)
            .map_err(|e| LlmError::CacheError(e.to_string()))
    }

    /// Count cached responses for the wrapped provider's model.
    pub fn cache_stats(&self) -> CacheStats {
        let cached_responses = fs::read_dir(self.model_dir())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                    .count()
            })
            .unwrap_or(0);
        CacheStats { cached_responses }
    }
}

#[async_trait]
impl LlmProvider for CachingProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let prompt_hash = Self::prompt_hash(prompt);

        if let Some(entry) = Self::read_entry(&self.entry_path(&prompt_hash)) {
            tracing::debug!(
                provider = self.inner.provider_name(),
                model = self.inner.model_name(),
                prompt_hash = %prompt_hash,
                cached_at = %entry.cached_at,
                "LLM cache hit"
            );
            return Ok(entry.response);
        }

        tracing::debug!(
            provider = self.inner.provider_name(),
            model = self.inner.model_name(),
            prompt_hash = %prompt_hash,
            "LLM cache miss, calling provider"
        );
        let response = self.inner.complete(prompt).await?;

        if let Err(e) = self.write_entry(&prompt_hash, &response) {
            tracing::warn!(error = %e, "Failed to cache LLM response");
        }

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
