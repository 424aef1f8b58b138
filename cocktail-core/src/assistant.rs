//! The suggestion chain: ingredients + preference → prompt → model → markdown.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::{LlmError, LlmProvider};
use crate::prompts::{render_cocktail_prompt, COCKTAIL_PROMPT_NAME};
use crate::rewrite::convert_quantities;
use crate::units::VolumeUnit;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Please select at least one ingredient")]
    NoIngredients,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// One suggestion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocktailRequest {
    /// Free-text preference, e.g. "something sweet and refreshing".
    pub prompt: String,
    pub ingredients: Vec<String>,
}

impl CocktailRequest {
    pub fn new(prompt: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ingredients,
        }
    }
}

#[derive(Debug)]
pub struct CocktailAssistant {
    provider: Box<dyn LlmProvider>,
}

impl CocktailAssistant {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Ask the model for cocktails and return its markdown.
    ///
    /// With `units` set, every ml/oz measurement in the answer is rewritten
    /// into that unit before returning.
    pub async fn suggest(
        &self,
        request: &CocktailRequest,
        units: Option<VolumeUnit>,
    ) -> Result<String, AssistantError> {
        let ingredients: Vec<String> = request
            .ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();
        if ingredients.is_empty() {
            return Err(AssistantError::NoIngredients);
        }

        let prompt = render_cocktail_prompt(&request.prompt, &ingredients);
        tracing::info!(
            prompt_name = COCKTAIL_PROMPT_NAME,
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            ingredients = ingredients.len(),
            "Requesting cocktail suggestions"
        );

        let markdown = self.provider.complete(&prompt).await?;

        Ok(match units {
            Some(unit) => convert_quantities(&markdown, unit),
            None => markdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use crate::prompts::NO_MATCH_REPLY;

    fn assistant() -> CocktailAssistant {
        CocktailAssistant::new(Box::new(FakeProvider::with_cocktail_responses()))
    }

    #[tokio::test]
    async fn test_suggest_without_units_returns_model_text() {
        let request = CocktailRequest::new("tart", vec!["gin".into(), "lime juice".into()]);
        let markdown = assistant().suggest(&request, None).await.unwrap();
        assert!(markdown.contains("- 2 oz gin"));
        assert!(markdown.contains("- ¾ oz lime juice"));
    }

    #[tokio::test]
    async fn test_suggest_converts_to_ml() {
        let request = CocktailRequest::new("", vec!["Gin".into()]);
        let markdown = assistant()
            .suggest(&request, Some(VolumeUnit::Milliliter))
            .await
            .unwrap();
        assert!(markdown.contains("- 60 ml gin"));
        assert!(markdown.contains("- 23 ml lime juice"));
        assert!(markdown.contains("- 23 ml simple syrup"));
    }

    #[tokio::test]
    async fn test_suggest_converts_to_oz() {
        let request = CocktailRequest::new("", vec!["white rum".into()]);
        let markdown = assistant()
            .suggest(&request, Some(VolumeUnit::FluidOunce))
            .await
            .unwrap();
        assert!(markdown.contains("- 2 oz white rum"));
        assert!(markdown.contains("- 0.75 oz lime juice"));
        assert!(markdown.contains("- 0.5 oz simple syrup"));
        assert!(markdown.contains("10 seconds"));
    }

    #[tokio::test]
    async fn test_no_match_passes_through() {
        let request = CocktailRequest::new("", vec!["milk".into()]);
        let markdown = assistant()
            .suggest(&request, Some(VolumeUnit::Milliliter))
            .await
            .unwrap();
        assert_eq!(markdown, NO_MATCH_REPLY);
    }

    #[tokio::test]
    async fn test_requires_ingredients() {
        let request = CocktailRequest::new("anything", vec!["  ".into()]);
        let err = assistant().suggest(&request, None).await.unwrap_err();
        assert!(matches!(err, AssistantError::NoIngredients));
    }

    #[tokio::test]
    async fn test_model_errors_propagate() {
        let assistant = CocktailAssistant::new(Box::new(FakeProvider::new()));
        let request = CocktailRequest::new("", vec!["gin".into()]);
        let err = assistant.suggest(&request, None).await.unwrap_err();
        assert!(matches!(err, AssistantError::Llm(LlmError::RequestFailed(_))));
    }
}
