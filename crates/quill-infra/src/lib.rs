//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! storage, the AI provider client, and the dashboard login check.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No database, in-memory storage only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `auth` - Argon2 login credentials

pub mod ai;
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{InMemoryBlogPostRepository, InMemoryTopicRepository};

// Re-exports - AI
pub use ai::{ContentConfig, OpenAiCompatibleClient, ProviderCredentials, ProviderRegistry};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresBlogPostRepository, PostgresTopicRepository};

#[cfg(feature = "auth")]
pub use auth::{AuthError, LoginCredentials};
