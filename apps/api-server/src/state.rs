//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{BlogPostRepository, ContentGenerator, TopicRepository};
use quill_core::{BlogService, TopicService};
use quill_infra::ai::ConfigError;
use quill_infra::{
    ContentConfig, InMemoryBlogPostRepository, InMemoryTopicRepository, OpenAiCompatibleClient,
    ProviderRegistry,
};

#[cfg(feature = "auth")]
use quill_infra::{AuthError, LoginCredentials};

#[cfg(feature = "postgres")]
use quill_infra::database::{DatabaseConfig, connect};
#[cfg(feature = "postgres")]
use quill_infra::{PostgresBlogPostRepository, PostgresTopicRepository};

use crate::config::AppConfig;

/// Startup failures that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("content config: {0}")]
    Config(#[from] ConfigError),

    #[cfg(feature = "auth")]
    #[error("login credentials: {0}")]
    Auth(#[from] AuthError),

    #[cfg(feature = "postgres")]
    #[error("migration failed: {0}")]
    Migration(#[from] migration::DbErr),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub topics: Arc<TopicService>,
    pub blogs: Arc<BlogService>,
    /// `None` when no login is configured; every attempt is then refused.
    #[cfg(feature = "auth")]
    pub credentials: Option<Arc<LoginCredentials>>,
    /// Render internal error detail in 500 envelopes.
    pub expose_error_detail: bool,
}

type Repositories = (Arc<dyn TopicRepository>, Arc<dyn BlogPostRepository>);

fn in_memory() -> Repositories {
    let posts = Arc::new(InMemoryBlogPostRepository::new());
    let topics: Arc<dyn TopicRepository> =
        Arc::new(InMemoryTopicRepository::with_posts(posts.clone()));
    (topics, posts)
}

#[cfg(feature = "postgres")]
async fn postgres_or_memory(config: Option<&DatabaseConfig>) -> Result<Repositories, StateError> {
    use migration::{Migrator, MigratorTrait};

    let Some(config) = config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Ok(in_memory());
    };

    match connect(config).await {
        Ok(db) => {
            Migrator::up(&db, None).await?;
            tracing::info!("Database migrations applied");
            let topics: Arc<dyn TopicRepository> =
                Arc::new(PostgresTopicRepository::new(db.clone()));
            let posts: Arc<dyn BlogPostRepository> = Arc::new(PostgresBlogPostRepository::new(db));
            Ok((topics, posts))
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            Ok(in_memory())
        }
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, StateError> {
        let content = ContentConfig::load_or_default(&config.content_config_path)?;

        #[cfg(feature = "postgres")]
        let (topic_repo, post_repo) = postgres_or_memory(config.database.as_ref()).await?;

        #[cfg(not(feature = "postgres"))]
        let (topic_repo, post_repo) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory()
        };

        let registry = ProviderRegistry::with_priority(
            config.providers.clone().into_descriptors(),
            &content.providers,
        );
        tracing::debug!(providers = ?registry.names(), "AI provider priority");

        let themes = content.main_themes.clone();
        let generator = Arc::new(OpenAiCompatibleClient::new(registry, content));

        let state = Self::from_parts(topic_repo, post_repo, generator, themes)
            .with_error_detail(config.is_development());

        #[cfg(feature = "auth")]
        let state = match &config.auth {
            Some(auth) => state.with_credentials(LoginCredentials::new(
                auth.username.clone(),
                &auth.password,
            )?),
            None => {
                tracing::warn!("AUTH_USERNAME/AUTH_PASSWORD not set. Login is disabled.");
                state
            }
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Wire both lifecycle managers over the given stores and generator.
    pub fn from_parts(
        topic_repo: Arc<dyn TopicRepository>,
        post_repo: Arc<dyn BlogPostRepository>,
        generator: Arc<dyn ContentGenerator>,
        themes: Vec<String>,
    ) -> Self {
        Self {
            topics: Arc::new(TopicService::new(
                topic_repo.clone(),
                generator.clone(),
                themes,
            )),
            blogs: Arc::new(BlogService::new(post_repo, topic_repo, generator)),
            #[cfg(feature = "auth")]
            credentials: None,
            expose_error_detail: false,
        }
    }

    pub fn with_error_detail(mut self, expose: bool) -> Self {
        self.expose_error_detail = expose;
        self
    }

    /// In-memory state for handler tests.
    #[cfg(test)]
    pub fn in_memory(generator: Arc<dyn ContentGenerator>, themes: Vec<String>) -> Self {
        let (topic_repo, post_repo) = in_memory();
        Self::from_parts(topic_repo, post_repo, generator, themes)
    }

    #[cfg(feature = "auth")]
    pub fn with_credentials(mut self, credentials: LoginCredentials) -> Self {
        self.credentials = Some(Arc::new(credentials));
        self
    }
}
