//! Error handling - every failure leaves as the standard response envelope.

use std::fmt;

use actix_web::dev::ServiceResponse;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};

use quill_core::DomainError;
use quill_core::error::RepoError;
use quill_shared::ErrorResponse;

use crate::observability::RequestId;
use crate::state::AppState;

/// Message shown for any failure while drafting a post.
const GENERATION_FAILED: &str = "Failed to generate blog post";

/// Application-level error type that converts to envelope responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    /// `message` is shown to clients. `detail` is added by [`attach_detail`]
    /// when the state allows it.
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal {
            message: "Internal Server Error".to_string(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal { message, detail } => write!(f, "{}: {}", message, detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                ErrorResponse::bad_request(msg.clone())
            }
            AppError::Unauthorized(msg) => ErrorResponse::unauthorized(msg.clone()),
            AppError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            AppError::Internal { message, detail } => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::error(500, message.clone())
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Conflict(msg) => AppError::BadRequest(msg),
            err @ DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Generation(detail) => AppError::Internal {
                message: GENERATION_FAILED.to_string(),
                detail,
            },
            DomainError::Provider(e) => AppError::Internal {
                message: GENERATION_FAILED.to_string(),
                detail: e.to_string(),
            },
            DomainError::Store(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::BadRequest("Record not found".to_string()),
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::internal(format!("Database connection error: {msg}"))
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::internal(format!("Database query error: {msg}"))
            }
        }
    }
}

/// `ErrorHandlers` hook for 500s: re-renders an internal [`AppError`] with its
/// detail when [`AppState::expose_error_detail`] is set.
pub fn attach_detail<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let exposed = res
        .request()
        .app_data::<web::Data<AppState>>()
        .is_some_and(|state| state.expose_error_detail);
    let detailed = res
        .response()
        .error()
        .and_then(|e| e.as_error::<AppError>())
        .and_then(|e| match e {
            AppError::Internal { message, detail } => {
                Some(ErrorResponse::error(500, message.clone()).with_detail(detail.clone()))
            }
            _ => None,
        });

    match detailed {
        Some(body) if exposed => {
            let (req, res) = res.into_parts();
            let res = HttpResponse::build(res.status()).json(body);
            Ok(ErrorHandlerResponse::Response(
                ServiceResponse::new(req, res).map_into_right_body(),
            ))
        }
        _ => Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
    }
}

/// Malformed JSON bodies become a 400 envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Malformed query strings become a 400 envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Unknown routes. The request ID is echoed so the miss can be found in logs.
pub async fn not_found(request_id: RequestId) -> HttpResponse {
    HttpResponse::NotFound()
        .json(ErrorResponse::not_found("Not found").with_request_id(request_id.as_str()))
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
