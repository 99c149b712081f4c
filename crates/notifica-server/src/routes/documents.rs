use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use notifica_core::models::notification::Notification;

use crate::error::{ApiError, MISSING_BODY};
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Documento gerado com sucesso";

#[derive(Debug, Default, Deserialize)]
pub struct GenerateParams {
    #[serde(default)]
    pub base64: Option<String>,
}

impl GenerateParams {
    fn wants_base64(&self) -> bool {
        self.base64
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

#[derive(Serialize)]
pub struct Base64Document {
    pub pdf_base64: String,
    pub mensagem: &'static str,
}

/// `POST /gerar_documento`: render the posted notification.
///
/// Answers with the PDF inline, or with a JSON envelope carrying it as
/// base64 when `?base64=true` is given.
pub async fn generate_document(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let value = parse_body(&body)?;
    let notification = Notification::from_json(value)?;
    let file_name = notification.file_name();

    let renderer = state.renderer.clone();
    let pdf = tokio::task::spawn_blocking(move || {
        renderer.render(&notification).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Render(format!("render task failed: {e}")))??;

    tracing::info!(file_name = %file_name, size = pdf.len(), "document generated");

    if params.wants_base64() {
        return Ok(Json(Base64Document {
            pdf_base64: STANDARD.encode(&pdf),
            mensagem: SUCCESS_MESSAGE,
        })
        .into_response());
    }

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename={file_name}"),
            ),
        ],
        pdf,
    )
        .into_response())
}

/// Accept only a non-empty JSON object. Unparseable bodies report the parse
/// error; empty bodies, `{}` and non-objects are a missing body.
fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest(MISSING_BODY.to_string()));
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("JSON inválido: {e}")))?;
    match &value {
        Value::Object(map) if !map.is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(MISSING_BODY.to_string())),
    }
}
