use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::StatusCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use api::{build_router, sample_ideas};
use app_state::AppState;
use config::{load_settings, MockSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let state = app_state_for(&settings);
    let app = build_router(Arc::new(state), &settings.generate_ideas_path);

    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;
    info!(
        %addr,
        path = %settings.generate_ideas_path,
        force_status = ?settings.force_status,
        "mock backend listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn app_state_for(settings: &MockSettings) -> AppState {
    let force_status = settings
        .force_status
        .and_then(|code| match StatusCode::from_u16(code) {
            Ok(status) => Some(status),
            Err(_) => {
                warn!(code, "ignoring out-of-range forced status");
                None
            }
        });

    AppState {
        ideas: sample_ideas(),
        force_status,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
