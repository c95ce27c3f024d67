use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::domain::{Topic, TopicSource, TopicStatus};
use crate::error::DomainError;
use crate::ports::{BaseRepository, ContentGenerator, TopicRepository};

use super::require_id;

/// Number of topics requested by a bare `generate_topics` call.
pub const DEFAULT_TOPIC_BATCH: usize = 5;

const TOPIC_ID_REQUIRED: &str = "Topic id is required";

/// Topic lifecycle manager.
pub struct TopicService {
    topics: Arc<dyn TopicRepository>,
    generator: Arc<dyn ContentGenerator>,
    themes: Vec<String>,
}

impl TopicService {
    pub fn new(
        topics: Arc<dyn TopicRepository>,
        generator: Arc<dyn ContentGenerator>,
        themes: Vec<String>,
    ) -> Self {
        Self {
            topics,
            generator,
            themes,
        }
    }

    /// Topics with `status`, newest first. A `limit` of zero means no cap.
    pub async fn list_topics(
        &self,
        status: TopicStatus,
        limit: Option<u64>,
    ) -> Result<Vec<Topic>, DomainError> {
        let limit = limit.filter(|n| *n > 0);
        Ok(self.topics.find_by_status(status, limit).await?)
    }

    /// Add an operator-supplied topic. The name is stored as submitted.
    pub async fn add_topic(&self, name: &str) -> Result<Topic, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("Topic is required"));
        }

        let topic = self
            .topics
            .insert(Topic::new(name, TopicSource::Custom))
            .await?;
        tracing::info!(topic_id = %topic.id, name = %topic.name, "Topic added");
        Ok(topic)
    }

    /// Archive a topic. Archiving twice is harmless.
    pub async fn archive_topic(&self, id: &str) -> Result<(), DomainError> {
        let id = require_id(id, TOPIC_ID_REQUIRED)?;
        self.topics.set_status(id, TopicStatus::Archived).await?;
        tracing::info!(topic_id = %id, "Topic archived");
        Ok(())
    }

    pub async fn mark_used(&self, id: &str) -> Result<(), DomainError> {
        let id = require_id(id, TOPIC_ID_REQUIRED)?;
        self.topics.set_status(id, TopicStatus::Used).await?;
        tracing::info!(topic_id = %id, "Topic marked used");
        Ok(())
    }

    /// Permanently remove a topic together with its posts.
    pub async fn delete_topic(&self, id: &str) -> Result<(), DomainError> {
        let id = require_id(id, TOPIC_ID_REQUIRED)?;
        self.topics.delete(id).await?;
        tracing::info!(topic_id = %id, "Topic deleted");
        Ok(())
    }

    /// Seed up to `count` new topics from random themes.
    ///
    /// Provider failures degrade to the raw theme text. Names that already
    /// exist are skipped silently. Returns how many topics were inserted.
    pub async fn generate_topics(&self, count: usize) -> Result<usize, DomainError> {
        let mut phrases = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(theme) = self.pick_theme() else {
                tracing::warn!("No themes configured, skipping topic generation");
                continue;
            };
            phrases.push(self.generator.refine_topic(theme).await);
        }

        let mut seen = HashSet::new();
        let mut inserted = 0;
        for phrase in phrases {
            if phrase.trim().is_empty() || !seen.insert(phrase.clone()) {
                continue;
            }
            if self.topics.find_by_name(&phrase).await?.is_some() {
                tracing::debug!(name = %phrase, "Topic already exists, skipping");
                continue;
            }
            self.topics
                .insert(Topic::new(phrase, TopicSource::Generated))
                .await?;
            inserted += 1;
        }

        tracing::info!(requested = count, inserted, "Topics generated");
        Ok(inserted)
    }

    fn pick_theme(&self) -> Option<&str> {
        self.themes
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }
}
