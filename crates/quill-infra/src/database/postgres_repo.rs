//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use quill_core::domain::{BlogPost, PostStatus, Topic, TopicStatus};
use quill_core::error::RepoError;
use quill_core::ports::{BlogPostRepository, TopicRepository};

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::entity::topic::{self, Entity as TopicEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL topic repository.
pub type PostgresTopicRepository = PostgresBaseRepository<TopicEntity>;

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

fn expect_one_row(rows_affected: u64) -> Result<(), RepoError> {
    if rows_affected == 0 {
        Err(RepoError::NotFound)
    } else {
        Ok(())
    }
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn find_by_status(
        &self,
        status: TopicStatus,
        limit: Option<u64>,
    ) -> Result<Vec<Topic>, RepoError> {
        let mut query = TopicEntity::find()
            .filter(topic::Column::Status.eq(topic::Status::from(status)))
            .order_by_desc(topic::Column::CreatedAt);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let result = query.all(&self.db).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Topic>, RepoError> {
        tracing::debug!(name, "Finding topic by name");

        let result = TopicEntity::find()
            .filter(topic::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn set_status(&self, id: Uuid, status: TopicStatus) -> Result<(), RepoError> {
        let result = TopicEntity::update_many()
            .col_expr(topic::Column::Status, Expr::value(topic::Status::from(status)))
            .col_expr(topic::Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(topic::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        expect_one_row(result.rows_affected)
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_by_statuses(&self, statuses: &[PostStatus]) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .filter(
                blog_post::Column::Status
                    .is_in(statuses.iter().map(|s| blog_post::Status::from(*s))),
            )
            .order_by_desc(blog_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn set_status(&self, id: Uuid, status: PostStatus) -> Result<(), RepoError> {
        let result = BlogPostEntity::update_many()
            .col_expr(
                blog_post::Column::Status,
                Expr::value(blog_post::Status::from(status)),
            )
            .col_expr(
                blog_post::Column::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(blog_post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        expect_one_row(result.rows_affected)
    }

    async fn update_content(&self, id: Uuid, content: &str) -> Result<(), RepoError> {
        let result = BlogPostEntity::update_many()
            .col_expr(blog_post::Column::Content, Expr::value(content))
            .col_expr(
                blog_post::Column::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(blog_post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        expect_one_row(result.rows_affected)
    }
}
