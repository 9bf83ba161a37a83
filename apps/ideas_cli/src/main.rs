use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use client_core::{load_api_config, ApiConfig, IdeasGenerator, RequestStatus, RequestView};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(about = "Generate content ideas for a business type")]
struct Args {
    /// Overrides the configured API base URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Overrides the configured idea generation path.
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print the ideas as a JSON array.
    #[arg(long)]
    json: bool,
    business_type: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = apply_overrides(load_api_config(), &args);
    info!(
        endpoint = %config.endpoint(),
        timeout_secs = ?config.request_timeout_secs,
        "requesting ideas"
    );
    let generator = IdeasGenerator::from_config(&config)?;
    generator.generate(&args.business_type).await;

    let view = generator.view();
    if !log_outcome(&view) {
        eprintln!("{}", render::render_text(&view));
        return Ok(ExitCode::FAILURE);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.ideas)?);
    } else {
        println!("{}", render::render_text(&view));
    }
    Ok(ExitCode::SUCCESS)
}

/// Logs how the request settled; returns false when it failed.
fn log_outcome(view: &RequestView) -> bool {
    match view.status {
        RequestStatus::Failed => {
            warn!(
                error = view.error_message.as_deref().unwrap_or_default(),
                "idea generation failed"
            );
            false
        }
        status => {
            info!(?status, count = view.ideas.len(), "idea generation finished");
            true
        }
    }
}

fn apply_overrides(mut config: ApiConfig, args: &Args) -> ApiConfig {
    if let Some(v) = &args.base_url {
        config.base_url = v.clone();
    }
    if let Some(v) = &args.endpoint {
        config.generate_ideas_path = v.clone();
    }
    if let Some(v) = args.timeout_secs {
        config.request_timeout_secs = Some(v);
    }
    config
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
