//! HTTP handlers and route configuration.

#[cfg(feature = "auth")]
mod auth;
mod blogs;
mod health;
mod topics;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, web};
use serde::Serialize;

use quill_shared::ApiResponse;

/// 200 envelope carrying `data`.
fn ok<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(data, message))
}

/// 200 envelope with `data: null`.
fn done(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::empty(message))
}

/// Configure all application routes.
///
/// Static segments are registered ahead of the `{id}` wildcards they would
/// otherwise collide with.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let api = web::scope("/api")
        // Public routes
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/topics")
                .route("", web::get().to(topics::list))
                .route("", web::post().to(topics::add))
                .route("/generate", web::get().to(topics::generate))
                .route("/delete/{id}", web::delete().to(topics::delete))
                .route("/{id}/used", web::put().to(topics::mark_used))
                .route("/{id}", web::delete().to(topics::archive)),
        )
        .service(
            web::scope("/blogs")
                .route("", web::get().to(blogs::list))
                .route("/approved", web::get().to(blogs::approved))
                .route("/generate", web::post().to(blogs::generate))
                .route("/approve/{id}", web::get().to(blogs::approve))
                .route("/reject/{id}", web::get().to(blogs::reject))
                .route("/publish/{id}", web::get().to(blogs::publish))
                .route("/update/{id}", web::post().to(blogs::update))
                .route("/delete/{id}", web::delete().to(blogs::delete))
                .route("/{id}", web::get().to(blogs::content)),
        );

    // Auth routes
    #[cfg(feature = "auth")]
    let api = api.service(web::scope("/auth").route("/login", web::post().to(auth::login)));

    cfg.service(api);
}
