use std::sync::Arc;

use actix_web::middleware::ErrorHandlers;
use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use quill_core::error::ProviderError;
use quill_core::ports::ContentGenerator;

use super::configure_routes;
use crate::middleware::error::{
    attach_detail, json_error_handler, not_found, query_error_handler,
};
use crate::state::AppState;

struct StubGenerator {
    fail: bool,
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate_post(&self, topic: &str) -> Result<String, ProviderError> {
        if self.fail {
            return Err(ProviderError::NotConfigured);
        }
        Ok(format!("<h1>{topic}</h1><p><strong>Tags:</strong> AI</p>"))
    }

    async fn refine_topic(&self, theme: &str) -> String {
        format!("{theme} for clinics")
    }
}

fn state(fail: bool) -> AppState {
    AppState::in_memory(
        Arc::new(StubGenerator { fail }),
        vec!["AI in diagnostics".to_string()],
    )
}

async fn send(state: &AppState, req: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .wrap(ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, attach_detail))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(configure_routes)
            .default_service(web::to(not_found)),
    )
    .await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

async fn add_topic(state: &AppState, name: &str) -> String {
    let (status, body) = send(
        state,
        test::TestRequest::post()
            .uri("/api/topics")
            .set_json(json!({ "topic": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn generate_post(state: &AppState, topic_id: &str) -> (StatusCode, Value) {
    send(
        state,
        test::TestRequest::post().uri(&format!("/api/blogs/generate?topicId={topic_id}")),
    )
    .await
}

#[actix_web::test]
async fn test_health_uses_envelope() {
    let state = state(false);

    let (status, body) = send(&state, test::TestRequest::get().uri("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["statusCode"], 200);
    assert!(body["data"]["version"].is_string());
}

#[actix_web::test]
async fn test_unknown_route_returns_not_found_envelope() {
    let state = state(false);

    let (status, body) = send(&state, test::TestRequest::get().uri("/api/nowhere")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Not found");
    assert_eq!(body["statusCode"], 404);
}

#[actix_web::test]
async fn test_add_and_list_topics() {
    let state = state(false);
    add_topic(&state, "AI in Radiology").await;

    let (status, body) = send(&state, test::TestRequest::get().uri("/api/topics?status=active")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Topics Fetched Successfully");
    let topics = body["data"].as_array().unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["name"], "AI in Radiology");
    assert_eq!(topics[0]["status"], "AVAILABLE");
    assert_eq!(topics[0]["source"], "CUSTOM");
}

#[actix_web::test]
async fn test_add_blank_topic_is_rejected() {
    let state = state(false);

    let (status, body) = send(
        &state,
        test::TestRequest::post()
            .uri("/api/topics")
            .set_json(json!({ "topic": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Topic is required");
    assert_eq!(body["statusCode"], 400);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request_envelope() {
    let state = state(false);

    let (status, body) = send(
        &state,
        test::TestRequest::post()
            .uri("/api/topics")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[actix_web::test]
async fn test_archive_and_mark_used_move_topics_between_filters() {
    let state = state(false);
    let archived = add_topic(&state, "Old idea").await;
    let used = add_topic(&state, "Covered idea").await;

    let (status, body) = send(
        &state,
        test::TestRequest::delete().uri(&format!("/api/topics/{archived}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Topics Removed Successfully");
    assert!(body["data"].is_null());

    let (status, _) = send(
        &state,
        test::TestRequest::put().uri(&format!("/api/topics/{used}/used")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, active) = send(&state, test::TestRequest::get().uri("/api/topics")).await;
    assert!(active["data"].as_array().unwrap().is_empty());

    let (_, inactive) =
        send(&state, test::TestRequest::get().uri("/api/topics?status=inactive")).await;
    assert_eq!(inactive["data"][0]["id"], archived.as_str());

    let (_, used_list) = send(&state, test::TestRequest::get().uri("/api/topics?status=used")).await;
    assert_eq!(used_list["data"][0]["id"], used.as_str());
}

#[actix_web::test]
async fn test_generate_topics_inserts_refined_phrase() {
    let state = state(false);

    let (status, body) = send(&state, test::TestRequest::get().uri("/api/topics/generate")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Topics Generated Successfully");
    assert!(body["data"].is_null());

    let (_, list) = send(&state, test::TestRequest::get().uri("/api/topics")).await;
    let topics = list["data"].as_array().unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["name"], "AI in diagnostics for clinics");
    assert_eq!(topics[0]["source"], "GENERATED");
}

#[actix_web::test]
async fn test_blog_lifecycle_over_http() {
    let state = state(false);
    let topic_id = add_topic(&state, "AI in Radiology").await;

    let (status, body) = generate_post(&state, &topic_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog post generated");
    assert_eq!(body["data"]["status"], "PENDING");
    assert_eq!(body["data"]["topicId"], topic_id.as_str());
    assert_eq!(body["data"]["title"], "AI in Radiology");
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &state,
        test::TestRequest::get().uri(&format!("/api/blogs/approve/{post_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog post approved");

    let (_, approved) = send(&state, test::TestRequest::get().uri("/api/blogs/approved")).await;
    assert_eq!(approved["data"]["posts"][0]["id"], post_id.as_str());

    send(
        &state,
        test::TestRequest::get().uri(&format!("/api/blogs/publish/{post_id}")),
    )
    .await;

    let (_, approved) = send(&state, test::TestRequest::get().uri("/api/blogs/approved")).await;
    assert!(approved["data"]["posts"].as_array().unwrap().is_empty());

    let (_, buckets) = send(&state, test::TestRequest::get().uri("/api/blogs")).await;
    assert_eq!(buckets["data"]["published"][0]["id"], post_id.as_str());
    assert!(buckets["data"]["pending"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_update_and_read_post_content() {
    let state = state(false);
    let topic_id = add_topic(&state, "Clinical notes").await;
    let (_, body) = generate_post(&state, &topic_id).await;
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &state,
        test::TestRequest::post()
            .uri(&format!("/api/blogs/update/{post_id}"))
            .set_json(json!({ "content": "<p>edited</p>" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog post updated");

    let (status, body) = send(&state, test::TestRequest::get().uri(&format!("/api/blogs/{post_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["content"], "<p>edited</p>");
    assert_eq!(body["data"]["title"], "Clinical notes");
}

#[actix_web::test]
async fn test_update_with_blank_content_is_rejected() {
    let state = state(false);

    let (status, body) = send(
        &state,
        test::TestRequest::post()
            .uri(&format!("/api/blogs/update/{}", uuid::Uuid::new_v4()))
            .set_json(json!({ "content": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Content is required");
}

#[actix_web::test]
async fn test_missing_post_reads_as_null() {
    let state = state(false);

    let (status, body) = send(
        &state,
        test::TestRequest::get().uri(&format!("/api/blogs/{}", uuid::Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());
}

#[actix_web::test]
async fn test_generate_without_topic_id() {
    let state = state(false);

    let (status, body) = send(&state, test::TestRequest::post().uri("/api/blogs/generate")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Topic is required");
}

#[actix_web::test]
async fn test_generate_for_unknown_topic() {
    let state = state(false);

    let (status, body) = generate_post(&state, &uuid::Uuid::new_v4().to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Topic not found");
}

#[actix_web::test]
async fn test_generate_for_archived_topic_conflicts() {
    let state = state(false);
    let topic_id = add_topic(&state, "Retired").await;
    send(
        &state,
        test::TestRequest::delete().uri(&format!("/api/topics/{topic_id}")),
    )
    .await;

    let (status, body) = generate_post(&state, &topic_id).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Topic is not available for post generation");

    let (_, buckets) = send(&state, test::TestRequest::get().uri("/api/blogs")).await;
    assert!(buckets["data"]["pending"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_provider_failure_is_generation_error() {
    let state = state(true);
    let topic_id = add_topic(&state, "AI in Radiology").await;

    let (status, body) = generate_post(&state, &topic_id).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to generate blog post");
    assert_eq!(body["statusCode"], 500);
    assert!(body["data"].is_null());
}

#[actix_web::test]
async fn test_error_detail_follows_state_flag() {
    let state = state(true).with_error_detail(true);
    let topic_id = add_topic(&state, "AI in Radiology").await;

    let (status, body) = generate_post(&state, &topic_id).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to generate blog post");
    assert_eq!(
        body["data"]["detail"],
        "No valid AI provider configuration found"
    );
}

#[actix_web::test]
async fn test_blank_size_lists_every_topic() {
    let state = state(false);
    add_topic(&state, "First").await;
    add_topic(&state, "Second").await;

    let (status, body) = send(
        &state,
        test::TestRequest::get().uri("/api/topics?status=active&size="),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = send(&state, test::TestRequest::get().uri("/api/topics?size=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_topic_name_is_stored_as_submitted() {
    let state = state(false);
    add_topic(&state, "  padded name  ").await;

    let (_, body) = send(&state, test::TestRequest::get().uri("/api/topics")).await;

    assert_eq!(body["data"][0]["name"], "  padded name  ");
}

#[actix_web::test]
async fn test_approve_unknown_post_is_bad_request() {
    let state = state(false);

    let (status, body) = send(
        &state,
        test::TestRequest::get().uri(&format!("/api/blogs/approve/{}", uuid::Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Record not found");
}

#[actix_web::test]
async fn test_hard_delete_topic_removes_its_posts() {
    let state = state(false);
    let topic_id = add_topic(&state, "Short lived").await;
    let (_, body) = generate_post(&state, &topic_id).await;
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &state,
        test::TestRequest::delete().uri(&format!("/api/topics/delete/{topic_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&state, test::TestRequest::get().uri(&format!("/api/blogs/{post_id}"))).await;
    assert!(body["data"].is_null());
}

#[actix_web::test]
async fn test_delete_post() {
    let state = state(false);
    let topic_id = add_topic(&state, "Disposable").await;
    let (_, body) = generate_post(&state, &topic_id).await;
    let post_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &state,
        test::TestRequest::delete().uri(&format!("/api/blogs/delete/{post_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog post deleted successfully");

    let (status, _) = send(
        &state,
        test::TestRequest::delete().uri(&format!("/api/blogs/delete/{post_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[cfg(feature = "auth")]
mod login {
    use quill_infra::LoginCredentials;

    use super::*;

    fn login_request(username: &str, password: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": username, "password": password }))
    }

    #[actix_web::test]
    async fn test_login_accepts_configured_credentials() {
        let state = state(false).with_credentials(LoginCredentials::new("admin", "s3cret").unwrap());

        let (status, body) = send(&state, login_request("admin", "s3cret")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login successful");
    }

    #[actix_web::test]
    async fn test_login_rejects_wrong_password() {
        let state = state(false).with_credentials(LoginCredentials::new("admin", "s3cret").unwrap());

        let (status, body) = send(&state, login_request("admin", "guess")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid username or password");
    }

    #[actix_web::test]
    async fn test_login_disabled_without_configuration() {
        let state = state(false);

        let (status, _) = send(&state, login_request("admin", "s3cret")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
