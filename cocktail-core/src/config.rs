//! Assistant configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::DEFAULT_CATALOG_PATH;
use crate::units::VolumeUnit;

/// Default local Ollama endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "llama3";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.6;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which backend generates the suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Ollama,
    Fake,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama),
            "fake" => Ok(ProviderKind::Fake),
            other => Err(format!("unknown provider {:?}, expected ollama or fake", other)),
        }
    }
}

/// Assistant configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub provider: ProviderKind,
    /// Model name (e.g., "llama3", "mistral").
    pub model: String,
    pub temperature: f32,
    /// Base URL of the Ollama server.
    pub ollama_url: String,
    /// Path to the ingredient catalog JSON.
    pub ingredients_path: PathBuf,
    /// Directory for caching model responses. `None` disables caching.
    pub cache_dir: Option<PathBuf>,
    /// Unit to rewrite measurements into. `None` leaves them as generated.
    pub units: Option<VolumeUnit>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Ollama,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ingredients_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            cache_dir: None,
            units: None,
        }
    }
}

impl AssistantConfig {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `COCKTAIL_PROVIDER`: "ollama" or "fake" (default: "ollama")
    /// - `COCKTAIL_MODEL`: Model name (default: "llama3")
    /// - `COCKTAIL_TEMPERATURE`: Sampling temperature, 0 to 2 (default: 0.6)
    /// - `COCKTAIL_OLLAMA_URL`: Ollama base URL (default: "http://localhost:11434")
    /// - `COCKTAIL_INGREDIENTS_PATH`: Catalog file (default: "data/ingredients.json")
    /// - `COCKTAIL_CACHE_DIR`: Response cache directory, or "default" for
    ///   ~/.cocktail/llm-cache (default: no cache)
    /// - `COCKTAIL_UNITS`: "ml" or "oz" (default: leave units as generated)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AssistantConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match var("COCKTAIL_PROVIDER") {
            Some(value) => value
                .parse()
                .map_err(|reason| invalid("COCKTAIL_PROVIDER", &value, reason))?,
            None => defaults.provider,
        };

        let model = var("COCKTAIL_MODEL").unwrap_or(defaults.model);

        let temperature = match var("COCKTAIL_TEMPERATURE") {
            Some(value) => parse_temperature(&value)?,
            None => defaults.temperature,
        };

        let ollama_url = var("COCKTAIL_OLLAMA_URL").unwrap_or(defaults.ollama_url);

        let ingredients_path = var("COCKTAIL_INGREDIENTS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.ingredients_path);

        let cache_dir = var("COCKTAIL_CACHE_DIR").map(|v| {
            if v == "default" {
                Self::default_cache_dir()
            } else {
                PathBuf::from(v)
            }
        });

        let units = match var("COCKTAIL_UNITS") {
            Some(value) => Some(
                value
                    .parse::<VolumeUnit>()
                    .map_err(|e| invalid("COCKTAIL_UNITS", &value, e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            provider,
            model,
            temperature,
            ollama_url,
            ingredients_path,
            cache_dir,
            units,
        })
    }

    /// Get the default cache directory: ~/.cocktail/llm-cache
    pub fn default_cache_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".cocktail").join("llm-cache"))
            .unwrap_or_else(|| PathBuf::from("data/llm-cache"))
    }
}

fn parse_temperature(value: &str) -> Result<f32, ConfigError> {
    let temperature: f32 = value
        .trim()
        .parse()
        .map_err(|_| invalid("COCKTAIL_TEMPERATURE", value, "not a number".to_string()))?;
    if !(0.0..=2.0).contains(&temperature) {
        return Err(invalid(
            "COCKTAIL_TEMPERATURE",
            value,
            "must be between 0 and 2".to_string(),
        ));
    }
    Ok(temperature)
}

fn invalid(var: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason,
    }
}
