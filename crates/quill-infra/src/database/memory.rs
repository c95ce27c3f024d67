//! In-memory repositories - used when no database is configured.
//!
//! Data is lost on process restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{BlogPost, PostStatus, Topic, TopicStatus};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BlogPostRepository, TopicRepository};

/// In-memory topic repository using a HashMap with async RwLock.
#[derive(Default)]
pub struct InMemoryTopicRepository {
    store: RwLock<HashMap<Uuid, Topic>>,
    posts: Option<Arc<InMemoryBlogPostRepository>>,
}

impl InMemoryTopicRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cascade topic deletion into `posts`, like the foreign key does in
    /// PostgreSQL.
    pub fn with_posts(posts: Arc<InMemoryBlogPostRepository>) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            posts: Some(posts),
        }
    }
}

#[async_trait]
impl BaseRepository<Topic, Uuid> for InMemoryTopicRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Topic>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, topic: Topic) -> Result<Topic, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&topic.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(topic.id, topic.clone());
        Ok(topic)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .ok_or(RepoError::NotFound)?;

        if let Some(posts) = &self.posts {
            posts.remove_for_topic(id).await;
        }
        Ok(())
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicRepository {
    async fn find_by_status(
        &self,
        status: TopicStatus,
        limit: Option<u64>,
    ) -> Result<Vec<Topic>, RepoError> {
        let store = self.store.read().await;
        let mut topics: Vec<Topic> = store
            .values()
            .filter(|t| t.status == status)
            .cloned()
            .collect();
        topics.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            topics.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(topics)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Topic>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|t| t.name == name).cloned())
    }

    async fn set_status(&self, id: Uuid, status: TopicStatus) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let topic = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        topic.status = status;
        topic.updated_at = Utc::now();
        Ok(())
    }
}

/// In-memory blog post repository.
#[derive(Default)]
pub struct InMemoryBlogPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn remove_for_topic(&self, topic_id: Uuid) {
        self.store
            .write()
            .await
            .retain(|_, post| post.topic_id != topic_id);
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_by_statuses(&self, statuses: &[PostStatus]) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store
            .values()
            .filter(|p| statuses.contains(&p.status))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn set_status(&self, id: Uuid, status: PostStatus) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.status = status;
        post.updated_at = Utc::now();
        Ok(())
    }

    async fn update_content(&self, id: Uuid, content: &str) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.content = content.to_string();
        post.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quill_core::domain::TopicSource;

    use super::*;

    #[tokio::test]
    async fn test_find_by_status_newest_first_with_limit() {
        let repo = InMemoryTopicRepository::new();
        let mut older = Topic::new("older", TopicSource::Custom);
        older.created_at = Utc::now() - chrono::Duration::minutes(5);
        repo.insert(older).await.unwrap();
        repo.insert(Topic::new("newer", TopicSource::Custom))
            .await
            .unwrap();

        let all = repo
            .find_by_status(TopicStatus::Available, None)
            .await
            .unwrap();
        assert_eq!(all[0].name, "newer");
        assert_eq!(all[1].name, "older");

        let capped = repo
            .find_by_status(TopicStatus::Available, Some(1))
            .await
            .unwrap();
        assert_eq!(capped.len(), 1);
    }

    #[tokio::test]
    async fn test_set_status_on_missing_topic() {
        let repo = InMemoryTopicRepository::new();
        let err = repo
            .set_status(Uuid::new_v4(), TopicStatus::Archived)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_topic_cascades_to_posts() {
        let posts = Arc::new(InMemoryBlogPostRepository::new());
        let topics = InMemoryTopicRepository::with_posts(posts.clone());

        let topic = topics
            .insert(Topic::new("cascade", TopicSource::Custom))
            .await
            .unwrap();
        let post = posts
            .insert(BlogPost::new(topic.id, "cascade".into(), "<p>x</p>".into()))
            .await
            .unwrap();

        topics.delete(topic.id).await.unwrap();
        assert!(posts.find_by_id(post.id).await.unwrap().is_none());
    }
}
