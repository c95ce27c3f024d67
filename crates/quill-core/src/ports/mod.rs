//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generator;
mod repository;

pub use generator::ContentGenerator;
pub use repository::{BaseRepository, BlogPostRepository, TopicRepository};
