//! OpenAI-compatible chat completion client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use quill_core::error::ProviderError;
use quill_core::ports::ContentGenerator;

use super::config::ContentConfig;
use super::prompt::{self, POST_SYSTEM_PROMPT, TOPIC_SYSTEM_PROMPT};
use super::provider::{ProviderDescriptor, ProviderRegistry};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Sampling settings for one kind of request.
#[derive(Debug, Clone, Copy)]
struct Sampling {
    max_tokens: u32,
    temperature: f32,
}

const POST_SAMPLING: Sampling = Sampling {
    max_tokens: 1500,
    temperature: 0.7,
};

const TOPIC_SAMPLING: Sampling = Sampling {
    max_tokens: 40,
    temperature: 0.8,
};

/// [`ContentGenerator`] that talks to the first credentialed provider of a
/// [`ProviderRegistry`].
pub struct OpenAiCompatibleClient {
    http: reqwest::Client,
    registry: ProviderRegistry,
    config: ContentConfig,
}

impl OpenAiCompatibleClient {
    pub fn new(registry: ProviderRegistry, config: ContentConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), registry, config)
    }

    pub fn with_http_client(
        http: reqwest::Client,
        registry: ProviderRegistry,
        config: ContentConfig,
    ) -> Self {
        match registry.select() {
            Some(provider) => tracing::info!(provider = %provider.name, "AI provider selected"),
            None => tracing::warn!("No AI provider has a credential; generation will fail"),
        }
        Self {
            http,
            registry,
            config,
        }
    }

    async fn chat(
        &self,
        system: &str,
        user: &str,
        sampling: Sampling,
    ) -> Result<String, ProviderError> {
        let provider = self.registry.select().ok_or(ProviderError::NotConfigured)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: sampling.max_tokens,
            temperature: sampling.temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", provider.base_url))
            .bearer_auth(provider.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| request_error(provider, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: provider.name.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let result: ChatResponse = response.json().await.map_err(|e| ProviderError::Decode {
            provider: provider.name.clone(),
            message: e.to_string(),
        })?;

        Ok(result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}

fn request_error(provider: &ProviderDescriptor, err: reqwest::Error) -> ProviderError {
    ProviderError::Request {
        provider: provider.name.clone(),
        message: err.to_string(),
    }
}

#[async_trait]
impl ContentGenerator for OpenAiCompatibleClient {
    async fn generate_post(&self, topic: &str) -> Result<String, ProviderError> {
        let prompt = prompt::post_prompt(topic, &self.config.company, &self.config.primary_keywords);

        self.chat(POST_SYSTEM_PROMPT, &prompt, POST_SAMPLING)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error generating blog post"))
    }

    async fn refine_topic(&self, theme: &str) -> String {
        let prompt = prompt::topic_prompt(theme, &self.config.primary_keywords);

        match self.chat(TOPIC_SYSTEM_PROMPT, &prompt, TOPIC_SAMPLING).await {
            Ok(reply) => {
                let phrase = prompt::clean_phrase(&reply);
                if phrase.is_empty() {
                    theme.to_string()
                } else {
                    phrase
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, theme, "Topic refinement failed, using theme");
                theme.to_string()
            }
        }
    }
}
