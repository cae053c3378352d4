use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Longest slice of raw model output ever echoed back to a caller.
pub const RAW_SNIPPET_MAX_CHARS: usize = 500;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The generator's text did not parse as JSON. Holds the bounded snippet.
    #[error("Model returned invalid JSON")]
    ModelInvalidJson(String),

    #[error("Model returned unexpected shape: {0}")]
    ModelBadShape(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Builds a `ModelInvalidJson` carrying at most `RAW_SNIPPET_MAX_CHARS`
    /// characters of the raw model output.
    pub fn invalid_json(raw: &str) -> Self {
        AppError::ModelInvalidJson(raw.chars().take(RAW_SNIPPET_MAX_CHARS).collect())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, detail) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method not allowed. Use POST.".to_string(),
                None,
            ),
            AppError::ModelInvalidJson(snippet) => {
                tracing::error!(
                    "Model returned invalid JSON ({} chars shown)",
                    snippet.chars().count()
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MODEL_INVALID_JSON",
                    "Model returned invalid (not JSON) output".to_string(),
                    Some(snippet.clone()),
                )
            }
            AppError::ModelBadShape(msg) => {
                tracing::error!("Model returned bad shape: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MODEL_BAD_SHAPE",
                    msg.clone(),
                    None,
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SERVER_ERROR",
                    e.to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SERVER_ERROR",
                    e.to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(detail) = detail {
            error["detail"] = json!(detail);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_snippet_is_bounded_prefix() {
        let raw = "x".repeat(2_000);
        match AppError::invalid_json(&raw) {
            AppError::ModelInvalidJson(snippet) => {
                assert_eq!(snippet.chars().count(), RAW_SNIPPET_MAX_CHARS);
                assert!(raw.starts_with(&snippet));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_snippet_respects_char_boundaries() {
        let raw = "é".repeat(600);
        match AppError::invalid_json(&raw) {
            AppError::ModelInvalidJson(snippet) => {
                assert_eq!(snippet.chars().count(), RAW_SNIPPET_MAX_CHARS)
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::ModelBadShape("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Llm(LlmError::EmptyContent).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
