//! Fake LLM provider for tests and offline runs.
//!
//! Returns canned responses picked by substring match against the prompt, so
//! the whole suggestion flow can run without a model server.

use super::{LlmError, LlmProvider};
use crate::prompts::NO_MATCH_REPLY;
use async_trait::async_trait;
use std::sync::RwLock;

const GIMLET: &str = "### Gimlet\n\n**Ingredients:**\n- 2 oz gin\n- ¾ oz lime juice\n- ¾ oz simple syrup\n\n**Instructions:** Shake with ice and strain into a chilled coupe.";

const DAIQUIRI: &str = "### Daiquiri\n\n**Ingredients:**\n- 60 ml white rum\n- 22.5 ml lime juice\n- 15 ml simple syrup\n\n**Instructions:** Shake hard with ice for 10 seconds and double strain.";

const MARGARITA: &str = "### Margarita\n\n**Ingredients:**\n- 1 1/2 oz tequila\n- 1 oz triple sec\n- 3/4 oz lime juice\n\n**Instructions:** Shake with ice and strain into a salt-rimmed glass.";

/// A fake LLM provider.
///
/// Patterns are checked in the order they were added; the first one found in
/// the prompt (case-insensitive) wins.
#[derive(Debug)]
pub struct FakeProvider {
    /// (prompt substring, response) pairs
    responses: RwLock<Vec<(String, String)>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(Vec::new()),
            default_response: Some(NO_MATCH_REPLY.to_string()),
        }
    }
}

impl FakeProvider {
    /// Create a FakeProvider with no registered responses and no default.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(Vec::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns `response` for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        let mut responses = self
            .responses
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        responses.push((prompt_contains.to_lowercase(), response.to_string()));
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Canned recipes keyed on a base spirit, falling back to the no-match reply.
    pub fn with_cocktail_responses() -> Self {
        let provider = Self::default();
        provider.add_response("gin", GIMLET);
        provider.add_response("white rum", DAIQUIRI);
        provider.add_response("tequila", MARGARITA);
        provider
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let responses = self
            .responses
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let prompt_lower = prompt.to_lowercase();
        if let Some((_, response)) = responses
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern.as_str()))
        {
            return Ok(response.clone());
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
