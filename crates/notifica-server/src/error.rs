use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use notifica_core::error::CoreError;
use notifica_export::error::RenderError;

pub const MISSING_BODY: &str = "Nenhum JSON foi fornecido";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Body missing, unparseable or not a usable object. The message is
    /// returned to the caller.
    BadRequest(String),
    /// Anything that failed after the body was accepted. The message is
    /// returned to the caller.
    Render(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(reason = %msg, "rejected request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Render(msg) => {
                tracing::error!("document generation failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Erro ao gerar documento: {msg}"),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NotAnObject(kind) => {
                tracing::debug!(kind, "request body is not an object");
                ApiError::BadRequest(MISSING_BODY.to_string())
            }
            CoreError::Serialization(inner) => ApiError::Render(inner.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Request(inner) => inner.into(),
            other => {
                tracing::debug!(error = ?other, "render error detail");
                ApiError::Render(other.to_string())
            }
        }
    }
}
