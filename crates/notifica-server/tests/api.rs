use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use tower::ServiceExt;

use notifica_export::pdf::NotificationRenderer;
use notifica_export::styles::{DocumentStyles, Letterhead};
use notifica_server::config::DEFAULT_BODY_LIMIT;
use notifica_server::state::AppState;

/// 4x2 px PNG.
const PNG_4X2: &str = "iVBORw0KGgoAAAANSUhEUgAAAAQAAAACCAIAAADwyuo0AAAAEElEQVR4nGM4IScHRwzIHABvCgghBqXSdgAAAABJRU5ErkJggg==";

fn test_app() -> Router {
    let letterhead = Letterhead {
        logo_path: "/nonexistent/notifica/logo.png".to_string(),
        ..Letterhead::default()
    };
    let renderer = NotificationRenderer::new(DocumentStyles::default(), letterhead);
    notifica_server::app(AppState::new(renderer), DEFAULT_BODY_LIMIT)
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn sample_request() -> Value {
    json!({
        "numero": "01/2025",
        "data_emissao": "2025-03-15",
        "bloco": "A",
        "unidade": "101",
        "tipo_notificacao": "Advertência",
        "assunto": "Barulho após as 22h",
        "fatos": ["Som alto no apartamento", "Reincidência"],
        "fundamentacao_legal": "Art. 10 do Regimento Interno.",
        "tipo_penalidade": "multa",
        "valor_multa": "R$ 200,00",
        "fotos_fatos": [PNG_4X2, "não é base64"]
    })
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "healthy"}));
}

#[tokio::test]
async fn empty_body_is_bad_request() {
    let response = test_app()
        .oneshot(post("/gerar_documento", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Nenhum JSON foi fornecido"})
    );
}

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let response = test_app()
        .oneshot(post("/gerar_documento", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.starts_with("JSON inválido: "), "{error}");
    assert_ne!(error, "Nenhum JSON foi fornecido");
}

#[tokio::test]
async fn empty_object_and_arrays_are_bad_requests() {
    for body in ["{}", "[]", "[1, 2]", "null", "\"texto\""] {
        let response = test_app()
            .oneshot(post("/gerar_documento", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(
            body_json(response).await,
            json!({"error": "Nenhum JSON foi fornecido"}),
            "body {body}"
        );
    }
}

#[tokio::test]
async fn numeric_facts_are_rendered() {
    let body = json!({"numero": "8", "fatos": ["Portão aberto", 3, 4.5]}).to_string();
    let response = test_app()
        .oneshot(post("/gerar_documento", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn non_list_photos_is_server_error_with_json_body() {
    let body = json!({"numero": "7", "fotos_fatos": "abc"}).to_string();
    let response = test_app()
        .oneshot(post("/gerar_documento", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let error = body_json(response).await["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.starts_with("Erro ao gerar documento: "), "{error}");
}

#[tokio::test]
async fn valid_request_returns_inline_pdf() {
    let response = test_app()
        .oneshot(post("/gerar_documento", sample_request().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "inline; filename=notificacao_01-2025.pdf"
    );
    let pdf = body_bytes(response).await;
    assert!(pdf.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn minimal_request_uses_default_file_name() {
    let body = json!({"assunto": "Vaga de garagem"}).to_string();
    let response = test_app()
        .oneshot(post("/gerar_documento", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "inline; filename=notificacao_doc.pdf"
    );
}

#[tokio::test]
async fn base64_mode_wraps_pdf_in_json() {
    let response = test_app()
        .oneshot(post(
            "/gerar_documento?base64=true",
            sample_request().to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["mensagem"], "Documento gerado com sucesso");
    let pdf = STANDARD
        .decode(body["pdf_base64"].as_str().unwrap())
        .unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn base64_false_keeps_raw_pdf() {
    let response = test_app()
        .oneshot(post(
            "/gerar_documento?base64=false",
            sample_request().to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = test_app()
        .oneshot(Request::get("/nada").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
