//! Standardized API response envelope.
//!
//! Every response, success or failure, has the same shape:
//! `{ "status": "success" | "error", "message", "data", "statusCode" }`.

use serde::{Deserialize, Serialize};

/// Outcome marker carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// API response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: Option<T>,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            status_code: 200,
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload; `data` serializes as `null`.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: None,
            status_code: 200,
        }
    }
}

/// Error envelope. `data` carries optional diagnostic detail.
pub type ErrorResponse = ApiResponse<serde_json::Value>;

impl ErrorResponse {
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
            status_code,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.data = Some(serde_json::json!({ "detail": detail.into() }));
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        let request_id = serde_json::Value::String(request_id.into());
        match self.data.as_mut().and_then(|d| d.as_object_mut()) {
            Some(map) => {
                map.insert("requestId".to_string(), request_id);
            }
            None => self.data = Some(serde_json::json!({ "requestId": request_id })),
        }
        self
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(400, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::error(401, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(404, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2], "ok")).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "ok");
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_empty_envelope_has_null_data() {
        let json = serde_json::to_value(ApiResponse::empty("Blog post approved")).unwrap();
        assert!(json["data"].is_null());
        assert!(json.as_object().unwrap().contains_key("data"));
    }

    #[test]
    fn test_error_envelope_shape() {
        let json = serde_json::to_value(
            ErrorResponse::not_found("Topic not found").with_request_id("req-1"),
        )
        .unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["data"]["requestId"], "req-1");
    }
}
