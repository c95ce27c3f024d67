use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostStatus, Topic, TopicStatus};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] when
    /// nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Topic repository.
#[async_trait]
pub trait TopicRepository: BaseRepository<Topic, Uuid> {
    /// Topics with the given status, newest first, at most `limit` of them.
    async fn find_by_status(
        &self,
        status: TopicStatus,
        limit: Option<u64>,
    ) -> Result<Vec<Topic>, RepoError>;

    /// Exact, case-sensitive name lookup.
    async fn find_by_name(&self, name: &str) -> Result<Option<Topic>, RepoError>;

    async fn set_status(&self, id: Uuid, status: TopicStatus) -> Result<(), RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    async fn find_by_statuses(&self, statuses: &[PostStatus]) -> Result<Vec<BlogPost>, RepoError>;

    async fn set_status(&self, id: Uuid, status: PostStatus) -> Result<(), RepoError>;

    async fn update_content(&self, id: Uuid, content: &str) -> Result<(), RepoError>;
}
