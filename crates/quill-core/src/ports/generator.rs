//! AI generation port.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Text generation backed by an AI provider.
///
/// Callers never learn which provider answered.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Draft an HTML blog post about `topic`.
    async fn generate_post(&self, topic: &str) -> Result<String, ProviderError>;

    /// Turn a broad theme into a short topic phrase.
    ///
    /// Never fails: implementations return `theme` unchanged when the
    /// provider cannot be reached.
    async fn refine_topic(&self, theme: &str) -> String;
}
