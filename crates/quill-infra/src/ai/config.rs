//! Content strategy configuration.
//!
//! Loaded once at startup and handed to the AI client and the topic service.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Errors raised while reading the content configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Order in which providers are tried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderPriority {
    pub primary: String,
    pub fallback: Vec<String>,
}

impl Default for ProviderPriority {
    fn default() -> Self {
        Self {
            primary: "groq".to_string(),
            fallback: vec!["openrouter".to_string(), "together".to_string()],
        }
    }
}

impl ProviderPriority {
    /// Provider names, primary first.
    pub fn ordered(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str())
            .chain(self.fallback.iter().map(String::as_str))
            .filter(|name| !name.is_empty())
    }
}

/// Themes, keywords and provider settings for generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub company: String,
    pub primary_keywords: Vec<String>,
    pub main_themes: Vec<String>,
    pub providers: ProviderPriority,
    pub model: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            company: "Quill Health".to_string(),
            primary_keywords: vec![
                "healthcare AI".to_string(),
                "clinical automation".to_string(),
                "medical imaging".to_string(),
            ],
            main_themes: vec![
                "AI in diagnostics".to_string(),
                "Automating clinical documentation".to_string(),
                "Patient engagement with conversational AI".to_string(),
                "Machine learning for hospital operations".to_string(),
                "Regulation and ethics of medical AI".to_string(),
            ],
            providers: ProviderPriority::default(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ContentConfig {
    /// Read the configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Like [`ContentConfig::load`], falling back to defaults when the file is
    /// absent. A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Content config not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
