use std::sync::Arc;

use crate::domain::{BlogPost, PostBuckets, PostStatus};
use crate::error::DomainError;
use crate::ports::{BaseRepository, BlogPostRepository, ContentGenerator, TopicRepository};

use super::{parse_id, require_id};

const BLOG_ID_REQUIRED: &str = "Blog Id is required";

/// Blog post lifecycle manager.
///
/// Status transitions are not guarded: callers are trusted to follow
/// `Pending -> Approved -> Published`.
pub struct BlogService {
    posts: Arc<dyn BlogPostRepository>,
    topics: Arc<dyn TopicRepository>,
    generator: Arc<dyn ContentGenerator>,
}

impl BlogService {
    pub fn new(
        posts: Arc<dyn BlogPostRepository>,
        topics: Arc<dyn TopicRepository>,
        generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        Self {
            posts,
            topics,
            generator,
        }
    }

    /// Pending, approved and published posts. Rejected posts are not listed.
    pub async fn list_all(&self) -> Result<PostBuckets, DomainError> {
        let posts = self
            .posts
            .find_by_statuses(&[
                PostStatus::Pending,
                PostStatus::Approved,
                PostStatus::Published,
            ])
            .await?;
        Ok(PostBuckets::partition(posts))
    }

    pub async fn list_approved(&self) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.posts.find_by_statuses(&[PostStatus::Approved]).await?)
    }

    /// Fetch one post. An unknown id is `Ok(None)`.
    pub async fn get_content(&self, id: &str) -> Result<Option<BlogPost>, DomainError> {
        let Some(id) = parse_id(id, BLOG_ID_REQUIRED)? else {
            return Ok(None);
        };
        Ok(self.posts.find_by_id(id).await?)
    }

    /// Draft a pending post from an available topic.
    ///
    /// The topic keeps its status, so it can seed further drafts.
    pub async fn generate(&self, topic_id: &str) -> Result<BlogPost, DomainError> {
        let raw = topic_id;
        let not_found = || DomainError::NotFound {
            entity: "Topic",
            id: raw.trim().to_string(),
        };

        let id = parse_id(topic_id, "Topic is required")?.ok_or_else(not_found)?;
        let topic = self.topics.find_by_id(id).await?.ok_or_else(not_found)?;
        if !topic.is_available() {
            return Err(DomainError::Conflict(
                "Topic is not available for post generation".to_string(),
            ));
        }

        let content = self.generator.generate_post(&topic.name).await?;
        if content.trim().is_empty() {
            return Err(DomainError::Generation(format!(
                "provider returned no content for topic {}",
                topic.id
            )));
        }

        let post = self
            .posts
            .insert(BlogPost::new(topic.id, topic.name, content))
            .await?;
        tracing::info!(post_id = %post.id, topic_id = %post.topic_id, "Blog post generated");
        Ok(post)
    }

    pub async fn approve(&self, id: &str) -> Result<(), DomainError> {
        self.transition(id, PostStatus::Approved).await
    }

    pub async fn reject(&self, id: &str) -> Result<(), DomainError> {
        self.transition(id, PostStatus::Rejected).await
    }

    pub async fn publish(&self, id: &str) -> Result<(), DomainError> {
        self.transition(id, PostStatus::Published).await
    }

    /// Replace the content of a post. Status is left alone.
    pub async fn update(&self, id: &str, content: &str) -> Result<(), DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::validation(BLOG_ID_REQUIRED));
        }
        if content.trim().is_empty() {
            return Err(DomainError::validation("Content is required"));
        }
        let id = require_id(id, BLOG_ID_REQUIRED)?;

        self.posts.update_content(id, content).await?;
        tracing::info!(post_id = %id, "Blog post updated");
        Ok(())
    }

    /// Hard delete, whatever the status.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let id = require_id(id, BLOG_ID_REQUIRED)?;
        self.posts.delete(id).await?;
        tracing::info!(post_id = %id, "Blog post deleted");
        Ok(())
    }

    async fn transition(&self, id: &str, status: PostStatus) -> Result<(), DomainError> {
        let id = require_id(id, BLOG_ID_REQUIRED)?;
        self.posts.set_status(id, status).await?;
        tracing::info!(post_id = %id, status = %status, "Blog post status changed");
        Ok(())
    }
}
