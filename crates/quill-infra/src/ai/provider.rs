//! Provider descriptors and priority-ordered selection.

use super::config::ProviderPriority;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const TOGETHER_BASE_URL: &str = "https://api.together.xyz/v1";

/// An OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct ProviderDescriptor {
    pub name: String,
    pub base_url: String,
    api_key: Option<String>,
}

impl ProviderDescriptor {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// A provider is usable once it has a non-blank key.
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("has_credential", &self.has_credential())
            .finish()
    }
}

/// API keys for the built-in providers.
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    pub groq: Option<String>,
    pub openrouter: Option<String>,
    pub together: Option<String>,
}

impl ProviderCredentials {
    /// Built-in descriptors, in declaration order.
    pub fn into_descriptors(self) -> Vec<ProviderDescriptor> {
        vec![
            ProviderDescriptor::new("groq", GROQ_BASE_URL, self.groq),
            ProviderDescriptor::new("openrouter", OPENROUTER_BASE_URL, self.openrouter),
            ProviderDescriptor::new("together", TOGETHER_BASE_URL, self.together),
        ]
    }
}

/// Providers in the order they are tried.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    /// Use `providers` in the given order.
    pub fn new(providers: Vec<ProviderDescriptor>) -> Self {
        Self { providers }
    }

    /// Arrange `available` by `priority`. Providers the priority does not
    /// mention are left out.
    pub fn with_priority(available: Vec<ProviderDescriptor>, priority: &ProviderPriority) -> Self {
        let mut providers: Vec<ProviderDescriptor> = Vec::new();
        for name in priority.ordered() {
            match available.iter().find(|p| p.name == name) {
                Some(provider) if !providers.iter().any(|p| p.name == name) => {
                    providers.push(provider.clone());
                }
                Some(_) => {}
                None => tracing::warn!(provider = name, "Unknown AI provider in priority list"),
            }
        }
        Self { providers }
    }

    /// The first provider whose credential is present.
    pub fn select(&self) -> Option<&ProviderDescriptor> {
        self.providers.iter().find(|p| p.has_credential())
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name.as_str()).collect()
    }
}
