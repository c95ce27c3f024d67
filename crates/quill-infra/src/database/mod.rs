//! Persistence - PostgreSQL through SeaORM, plus an in-memory fallback.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use memory::{InMemoryBlogPostRepository, InMemoryTopicRepository};

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConfig, connect};
#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresBlogPostRepository, PostgresTopicRepository};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
