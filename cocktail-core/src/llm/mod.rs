//! Text generation backends for cocktail suggestions.
//!
//! Everything above this module talks to a `dyn LlmProvider`, so the local
//! Ollama model, the disk cache and the test fake are interchangeable.

mod caching;
mod fake;
mod ollama;

pub use caching::{CacheStats, CachingProvider};
pub use fake::FakeProvider;
pub use ollama::OllamaProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::config::{AssistantConfig, ProviderKind};

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request to model failed: {0}")]
    RequestFailed(String),

    #[error("Model server returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

/// A text completion backend.
///
/// Implementations must be thread-safe; one provider is shared by every
/// request in the process.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt and get the model's text back.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name (e.g., "ollama", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g., "llama3").
    fn model_name(&self) -> &str;
}

/// Build the provider described by `config`, wrapped in a disk cache when
/// a cache directory is set.
pub fn create_provider(config: &AssistantConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    let inner: Box<dyn LlmProvider> = match config.provider {
        ProviderKind::Ollama => Box::new(OllamaProvider::new(
            config.ollama_url.clone(),
            config.model.clone(),
            config.temperature,
        )?),
        ProviderKind::Fake => Box::new(FakeProvider::with_cocktail_responses()),
    };

    tracing::info!(
        provider = inner.provider_name(),
        model = inner.model_name(),
        cached = config.cache_dir.is_some(),
        "Created LLM provider"
    );

    Ok(match &config.cache_dir {
        Some(dir) => Box::new(CachingProvider::new(inner, dir.clone())),
        None => inner,
    })
}
