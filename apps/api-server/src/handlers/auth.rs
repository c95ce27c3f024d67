//! Authentication handlers.

use actix_web::{HttpResponse, web};

use quill_shared::dto::LoginRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const INVALID_LOGIN: &str = "Invalid username or password";

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let credentials = state
        .credentials
        .as_ref()
        .ok_or_else(|| AppError::Unauthorized(INVALID_LOGIN.to_string()))?;

    credentials
        .verify(&req.username, &req.password)
        .map_err(|e| {
            tracing::warn!(username = %req.username, error = %e, "Login rejected");
            AppError::Unauthorized(INVALID_LOGIN.to_string())
        })?;

    tracing::info!(username = %credentials.username(), "Login successful");
    Ok(super::done("Login successful"))
}
