//! Routes of the development idea generation backend.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{BackendApiResponse, GenerateIdeasRequest, RawIdeaRecord},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

use crate::app_state::AppState;

const MAX_REQUEST_BYTES: usize = 16 * 1024;

pub(crate) fn build_router(state: Arc<AppState>, generate_ideas_path: &str) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(&route_path(generate_ideas_path), post(generate_ideas))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .with_state(state)
}

fn route_path(path: &str) -> String {
    format!("/{}", path.trim().trim_start_matches('/'))
}

pub(crate) fn sample_ideas() -> Vec<RawIdeaRecord> {
    vec![
        RawIdeaRecord {
            categoria: "Marketing".into(),
            formato_sugerido: "Reels".into(),
            titulo_gancho: "5 Tips para crecer en Instagram".into(),
            descripcion_ejecucion: "Graba un video corto explicando...".into(),
        },
        RawIdeaRecord {
            categoria: "Ventas".into(),
            formato_sugerido: "Carousel".into(),
            titulo_gancho: "Cómo cerrar más ventas".into(),
            descripcion_ejecucion: "Crea un carrusel con estos pasos...".into(),
        },
    ]
}

async fn healthz() -> &'static str {
    "ok"
}

async fn generate_ideas(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    if let Some(status) = state.force_status {
        warn!(status = status.as_u16(), "answering with forced status");
        return status.into_response();
    }

    let req: GenerateIdeasRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new(
                    ErrorCode::Validation,
                    format!("invalid request body: {err}"),
                )),
            )
                .into_response();
        }
    };

    let business_type = req.business_type.trim();
    if business_type.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                ErrorCode::Validation,
                "businessType cannot be empty",
            )),
        )
            .into_response();
    }

    info!(business_type, count = state.ideas.len(), "serving canned ideas");
    Json(BackendApiResponse::ok(state.ideas.clone())).into_response()
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
