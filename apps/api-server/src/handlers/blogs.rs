//! Blog post handlers.

use actix_web::{HttpResponse, web};

use quill_shared::dto::{GenerateBlogQuery, PostsPayload, UpdateBlogRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

const LISTED: &str = "API Successfull";

/// GET /api/blogs - pending, approved and published buckets.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let buckets = state.blogs.list_all().await?;
    Ok(super::ok(buckets, LISTED))
}

/// GET /api/blogs/approved
pub async fn approved(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blogs.list_approved().await?;
    Ok(super::ok(PostsPayload { posts }, LISTED))
}

/// GET /api/blogs/{id} - `data` is null when no post matches.
pub async fn content(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.blogs.get_content(&path).await?;
    Ok(super::ok(post, LISTED))
}

/// POST /api/blogs/generate?topicId=
pub async fn generate(
    state: web::Data<AppState>,
    query: web::Query<GenerateBlogQuery>,
) -> AppResult<HttpResponse> {
    let post = state.blogs.generate(&query.topic_id).await?;
    Ok(super::ok(post, "Blog post generated"))
}

/// GET /api/blogs/approve/{id}
pub async fn approve(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.blogs.approve(&path).await?;
    Ok(super::done("Blog post approved"))
}

/// GET /api/blogs/reject/{id}
pub async fn reject(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.blogs.reject(&path).await?;
    Ok(super::done("Blog post rejected"))
}

/// GET /api/blogs/publish/{id}
pub async fn publish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.blogs.publish(&path).await?;
    Ok(super::done("Blog post published"))
}

/// POST /api/blogs/update/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    state.blogs.update(&path, &body.content).await?;
    Ok(super::done("Blog post updated"))
}

/// DELETE /api/blogs/delete/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.blogs.delete(&path).await?;
    Ok(super::done("Blog post deleted successfully"))
}
