//! Topic handlers.

use actix_web::{HttpResponse, web};

use quill_core::DEFAULT_TOPIC_BATCH;
use quill_core::domain::TopicStatus;
use quill_shared::dto::{AddTopicRequest, ListTopicsQuery};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/topics?status=&size=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListTopicsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let status = TopicStatus::from_filter(query.status.as_deref());

    let topics = state.topics.list_topics(status, query.size).await?;
    Ok(super::ok(topics, "Topics Fetched Successfully"))
}

/// POST /api/topics
pub async fn add(
    state: web::Data<AppState>,
    body: web::Json<AddTopicRequest>,
) -> AppResult<HttpResponse> {
    let topic = state.topics.add_topic(&body.topic).await?;
    Ok(super::ok(topic, "Topics Added Successfully"))
}

/// DELETE /api/topics/{id} - archives, the row is kept.
pub async fn archive(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.topics.archive_topic(&path).await?;
    Ok(super::done("Topics Removed Successfully"))
}

/// DELETE /api/topics/delete/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.topics.delete_topic(&path).await?;
    Ok(super::done("Topics Deleted Successfully"))
}

/// PUT /api/topics/{id}/used
pub async fn mark_used(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.topics.mark_used(&path).await?;
    Ok(super::done("Topics Marked Used Successfully"))
}

/// GET /api/topics/generate
pub async fn generate(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let inserted = state.topics.generate_topics(DEFAULT_TOPIC_BATCH).await?;
    tracing::debug!(inserted, "Topic generation finished");
    Ok(super::done("Topics Generated Successfully"))
}
