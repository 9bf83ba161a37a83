use super::*;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
}

#[derive(Clone)]
struct ServerState {
    captured: Captured,
    status: StatusCode,
    body: &'static str,
}

async fn handle_generate(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    state.captured.requests.lock().await.push((content_type, json));
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

async fn spawn_server(status: StatusCode, body: &'static str) -> (Url, Captured) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let captured = Captured::default();
    let app = Router::new()
        .route("/api/generate-ideas", post(handle_generate))
        .with_state(ServerState {
            captured: captured.clone(),
            status,
            body,
        });
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let url = Url::parse(&format!("http://{addr}/api/generate-ideas")).expect("url");
    (url, captured)
}

const TWO_IDEAS: &str = r#"{
    "success": true,
    "ideas": [
        {"categoria": "Marketing", "formato_sugerido": "Reels", "titulo_gancho": "5 Tips para crecer en Instagram", "descripcion_ejecucion": "Graba un video corto explicando..."},
        {"categoria": "Ventas", "formato_sugerido": "Carousel", "titulo_gancho": "Cómo cerrar más ventas", "descripcion_ejecucion": "Crea un carrusel con estos pasos..."}
    ]
}"#;

#[tokio::test]
async fn posts_json_body_with_business_type() {
    let (url, captured) = spawn_server(StatusCode::OK, TWO_IDEAS).await;
    let backend = HttpIdeasBackend::new(url);

    backend
        .generate_ideas("Marketing Digital")
        .await
        .expect("ideas");

    let requests = captured.requests.lock().await;
    assert_eq!(requests.len(), 1);
    let (content_type, body) = &requests[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        &serde_json::json!({ "businessType": "Marketing Digital" })
    );
}

#[tokio::test]
async fn maps_records_to_ideas() {
    let (url, _captured) = spawn_server(StatusCode::OK, TWO_IDEAS).await;
    let ideas = HttpIdeasBackend::new(url)
        .generate_ideas("Marketing Digital")
        .await
        .expect("ideas");

    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[0].title, "5 Tips para crecer en Instagram");
    assert_eq!(ideas[0].description, "Graba un video corto explicando...");
    assert_eq!(ideas[0].category, "Marketing | Reels");
    assert_eq!(ideas[1].category, "Ventas | Carousel");
    assert_ne!(ideas[0].id, ideas[1].id);
}

#[tokio::test]
async fn non_success_status_becomes_server_error() {
    let (url, _captured) = spawn_server(StatusCode::INTERNAL_SERVER_ERROR, "").await;
    let err = HttpIdeasBackend::new(url)
        .generate_ideas("Chaos Test")
        .await
        .expect_err("must fail");
    assert_eq!(err, GenerateError::ServerError { status: 500 });
    assert_eq!(err.to_string(), "Error del servidor: 500");
}

#[tokio::test]
async fn error_body_does_not_mask_status() {
    let (url, _captured) = spawn_server(
        StatusCode::BAD_REQUEST,
        r#"{"code":"validation","message":"businessType is required"}"#,
    )
    .await;
    let err = HttpIdeasBackend::new(url)
        .generate_ideas("x")
        .await
        .expect_err("must fail");
    assert_eq!(err, GenerateError::ServerError { status: 400 });
}

#[tokio::test]
async fn unexpected_shapes_are_invalid_responses() {
    for body in [
        r#"{"success": false, "ideas": []}"#,
        r#"{"success": true}"#,
        r#"{"success": true, "ideas": {"titulo_gancho": "x"}}"#,
        r#"{"ideas": []}"#,
        "<html>not json</html>",
        "",
    ] {
        let (url, _captured) = spawn_server(StatusCode::OK, body).await;
        let err = HttpIdeasBackend::new(url)
            .generate_ideas("Marketing Digital")
            .await
            .expect_err("must fail");
        assert_eq!(err, GenerateError::InvalidResponseShape, "body: {body}");
    }
}

#[tokio::test]
async fn unreachable_server_is_connection_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/api/generate-ideas")).expect("url");
    let err = HttpIdeasBackend::new(url)
        .generate_ideas("Marketing Digital")
        .await
        .expect_err("must fail");
    assert_eq!(err, GenerateError::ConnectionError);
}

#[test]
fn from_config_rejects_invalid_base_url() {
    let config = ApiConfig {
        base_url: "not a url".to_string(),
        ..ApiConfig::default()
    };
    let err = HttpIdeasBackend::from_config(&config)
        .err()
        .expect("must fail");
    assert!(err.to_string().contains("invalid idea generation endpoint"));
}

#[test]
fn from_config_joins_endpoint() {
    let config = ApiConfig {
        base_url: "http://ideas.local/".to_string(),
        generate_ideas_path: "/api/generate-ideas".to_string(),
        request_timeout_secs: Some(3),
    };
    let backend = HttpIdeasBackend::from_config(&config).expect("backend");
    assert_eq!(
        backend.endpoint().as_str(),
        "http://ideas.local/api/generate-ideas"
    );
}

async fn handle_slow_generate() -> &'static str {
    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    r#"{"success": true, "ideas": []}"#
}

#[tokio::test]
async fn configured_timeout_becomes_connection_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route("/api/generate-ideas", post(handle_slow_generate));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let config = ApiConfig {
        base_url: format!("http://{addr}"),
        generate_ideas_path: "/api/generate-ideas".to_string(),
        request_timeout_secs: Some(1),
    };
    let backend = HttpIdeasBackend::from_config(&config).expect("backend");

    let started = std::time::Instant::now();
    let err = backend
        .generate_ideas("Marketing Digital")
        .await
        .expect_err("must time out");
    assert_eq!(err, GenerateError::ConnectionError);
    assert!(started.elapsed() < std::time::Duration::from_secs(4));
}
