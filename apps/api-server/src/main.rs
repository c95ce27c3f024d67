//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_cors::Cors;
use actix_web::middleware::{ErrorHandlers, from_fn};
use actix_web::{App, HttpServer, http::StatusCode, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::error::{attach_detail, json_error_handler, not_found, query_error_handler};
use observability::propagate_request_id;
use state::AppState;
use telemetry::{LogFormat, init_tracing};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env());

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{} ({:?})",
        config.host,
        config.port,
        config.environment
    );

    // Build application state
    let state = AppState::new(&config).await.map_err(|e| {
        tracing::error!("Failed to build application state: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let cors_origin = config.cors_origin.clone();
    let json_limit = config.json_limit;

    // Start HTTP server
    HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .supports_credentials(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, attach_detail))
            .wrap(cors)
            .wrap(from_fn(propagate_request_id))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(
                web::JsonConfig::default()
                    .limit(json_limit)
                    .error_handler(json_error_handler),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(handlers::configure_routes)
            .default_service(web::to(not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
