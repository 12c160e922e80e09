//! Error handling for the voyage HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::{NoContext, Timestamp, Uuid};

/// Failure envelope returned by every HTTP error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub code: String,
    pub trace_id: String,
    pub timestamp: String,
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {message}")]
    NotFound { message: String, code: String },

    #[error("bad request: {message}")]
    BadRequest { message: String, code: String },

    /// The message is what callers see; the source is only logged.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            code: "not_found".to_string(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            code: "bad_request".to_string(),
        }
    }

    /// Create an internal error with a caller-facing message
    pub fn internal(source: impl Into<anyhow::Error>, message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(source: anyhow::Error) -> Self {
        Self::internal(source, "An internal server error occurred")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v7(Timestamp::now(NoContext));
        let now = OffsetDateTime::now_utc();
        let timestamp = now.format(&Rfc3339).unwrap_or_else(|_| now.to_string());
        let status = self.status();

        let (error_code, message) = match self {
            AppError::NotFound { message, code } | AppError::BadRequest { message, code } => {
                tracing::warn!(
                    error_id = %error_id,
                    error_code = %code,
                    status_code = %status.as_u16(),
                    "Request error"
                );
                (code, message)
            }
            AppError::Internal { message, source } => {
                tracing::error!(
                    error_id = %error_id,
                    error_code = "internal_error",
                    status_code = %status.as_u16(),
                    error = ?source,
                    "Request error"
                );
                ("internal_error".to_string(), message)
            }
        };

        let body = ErrorBody {
            success: false,
            error: message,
            code: error_code,
            trace_id: error_id.to_string(),
            timestamp,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_bad_request_error() {
        let error = AppError::bad_request("tag must be given once");

        match error {
            AppError::BadRequest { code, message } => {
                assert_eq!(code, "bad_request");
                assert_eq!(message, "tag must be given once");
            }
            _ => panic!("Expected BadRequest error"),
        }
    }

    #[test]
    fn test_error_response_mapping() {
        let error = AppError::not_found("Resource not found");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_internal_error_hides_source() {
        let error = AppError::internal(
            anyhow::anyhow!("serializer exploded"),
            "Failed to generate travel post",
        );
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to generate travel post");
        assert_eq!(body["code"], "internal_error");
        assert!(!body.to_string().contains("serializer exploded"));
    }

    #[tokio::test]
    async fn test_error_response_format() {
        let response = AppError::not_found("Test resource not found").into_response();
        let body = body_json(response).await;

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Test resource not found");
        assert_eq!(body["code"], "not_found");
        assert!(body["traceId"].as_str().unwrap().parse::<Uuid>().is_ok());
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(OffsetDateTime::parse(timestamp, &Rfc3339).is_ok());
    }

    #[test]
    fn test_anyhow_converts_to_internal() {
        let error: AppError = anyhow::anyhow!("disk full").into();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "An internal server error occurred");
    }
}
