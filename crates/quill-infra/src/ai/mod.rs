//! AI generation - provider selection and the chat completion client.

mod client;
mod config;
mod prompt;
mod provider;

pub use client::OpenAiCompatibleClient;
pub use config::{ConfigError, ContentConfig, DEFAULT_MODEL, ProviderPriority};
pub use prompt::{clean_phrase, sanitize};
pub use provider::{
    GROQ_BASE_URL, OPENROUTER_BASE_URL, ProviderCredentials, ProviderDescriptor, ProviderRegistry,
    TOGETHER_BASE_URL,
};
