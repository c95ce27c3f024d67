//! # Quill Core
//!
//! The domain layer of Quill.
//! This crate contains the topic and blog-post lifecycle rules with zero
//! infrastructure dependencies. Storage and AI providers are reached through
//! the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{BlogService, DEFAULT_TOPIC_BATCH, TopicService};
