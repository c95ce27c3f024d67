//! Common test utilities and fixtures.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use quill_core::error::ProviderError;
use quill_core::ports::ContentGenerator;
use quill_core::{BlogService, TopicService};
use quill_infra::{InMemoryBlogPostRepository, InMemoryTopicRepository};

/// What the stub answers to `generate_post`.
#[allow(dead_code)]
pub enum PostReply {
    Html(String),
    Empty,
    Fail,
}

/// Deterministic [`ContentGenerator`].
pub struct StubGenerator {
    post: PostReply,
    /// `None` makes refinement fall back to the theme, as a provider failure would.
    refined: Option<String>,
    pub post_calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubGenerator {
    pub fn new(post: PostReply) -> Self {
        Self {
            post,
            refined: None,
            post_calls: AtomicUsize::new(0),
        }
    }

    pub fn refining_to(mut self, phrase: &str) -> Self {
        self.refined = Some(phrase.to_string());
        self
    }

    pub fn post_calls(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate_post(&self, topic: &str) -> Result<String, ProviderError> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        match &self.post {
            PostReply::Html(html) => Ok(format!("<h1>{topic}</h1>{html}")),
            PostReply::Empty => Ok(String::new()),
            PostReply::Fail => Err(ProviderError::Status {
                provider: "stub".to_string(),
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }

    async fn refine_topic(&self, theme: &str) -> String {
        self.refined.clone().unwrap_or_else(|| theme.to_string())
    }
}

/// Both services wired to one in-memory store.
pub struct Harness {
    pub topics: TopicService,
    pub blogs: BlogService,
    pub generator: Arc<StubGenerator>,
}

#[allow(dead_code)]
impl Harness {
    pub fn new(generator: StubGenerator) -> Self {
        Self::with_themes(generator, vec!["AI in diagnostics".to_string()])
    }

    pub fn with_themes(generator: StubGenerator, themes: Vec<String>) -> Self {
        let generator = Arc::new(generator);
        let post_repo = Arc::new(InMemoryBlogPostRepository::new());
        let topic_repo = Arc::new(InMemoryTopicRepository::with_posts(post_repo.clone()));

        Self {
            topics: TopicService::new(topic_repo.clone(), generator.clone(), themes),
            blogs: BlogService::new(post_repo, topic_repo, generator.clone()),
            generator,
        }
    }
}
