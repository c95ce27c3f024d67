use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use quill_core::domain::{BlogPost, PostStatus, Topic, TopicSource, TopicStatus};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BlogPostRepository, TopicRepository};

use crate::database::entity::{blog_post, topic};
use crate::database::postgres_repo::{PostgresBlogPostRepository, PostgresTopicRepository};

fn topic_model(name: &str, status: topic::Status) -> topic::Model {
    let now = Utc::now();
    topic::Model {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        status,
        source: topic::Source::Custom,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn exec_result(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

#[tokio::test]
async fn test_find_topic_by_id() {
    let model = topic_model("AI in Radiology", topic::Status::Available);
    let topic_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresTopicRepository::new(db);

    let result: Option<Topic> = repo.find_by_id(topic_id).await.unwrap();

    let topic = result.unwrap();
    assert_eq!(topic.id, topic_id);
    assert_eq!(topic.name, "AI in Radiology");
    assert_eq!(topic.status, TopicStatus::Available);
    assert_eq!(topic.source, TopicSource::Custom);
}

#[tokio::test]
async fn test_find_topics_by_status_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            topic_model("first", topic::Status::Used),
            topic_model("second", topic::Status::Used),
        ]])
        .into_connection();

    let repo = PostgresTopicRepository::new(db);

    let topics = repo.find_by_status(TopicStatus::Used, Some(2)).await.unwrap();

    assert_eq!(topics.len(), 2);
    assert!(topics.iter().all(|t| t.status == TopicStatus::Used));
}

#[tokio::test]
async fn test_set_topic_status_on_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(0)])
        .into_connection();

    let repo = PostgresTopicRepository::new(db);

    let err = repo
        .set_status(Uuid::new_v4(), TopicStatus::Archived)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_insert_blog_post_returns_stored_row() {
    let post = BlogPost::new(Uuid::new_v4(), "Title".into(), "<p>body</p>".into());
    let model = blog_post::Model {
        id: post.id,
        topic_id: post.topic_id,
        title: post.title.clone(),
        content: post.content.clone(),
        status: blog_post::Status::Pending,
        created_at: post.created_at.into(),
        updated_at: post.updated_at.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    let stored = repo.insert(post.clone()).await.unwrap();
    assert_eq!(stored.id, post.id);
    assert_eq!(stored.status, PostStatus::Pending);
}

#[tokio::test]
async fn test_update_content_and_delete_report_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(1), exec_result(0)])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    repo.update_content(Uuid::new_v4(), "<p>new</p>")
        .await
        .unwrap();
    let err = BaseRepository::<BlogPost, Uuid>::delete(&repo, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}
