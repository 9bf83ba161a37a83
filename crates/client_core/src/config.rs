use std::fs;

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_GENERATE_IDEAS_PATH: &str = "/api/generate-ideas";
const CONFIG_FILE: &str = "ideas.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub generate_ideas_path: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            generate_ideas_path: DEFAULT_GENERATE_IDEAS_PATH.into(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn endpoint(&self) -> String {
        join_endpoint(&self.base_url, &self.generate_ideas_path)
    }

    pub fn endpoint_url(&self) -> anyhow::Result<Url> {
        let endpoint = self.endpoint();
        Url::parse(&endpoint)
            .with_context(|| format!("invalid idea generation endpoint '{endpoint}'"))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    base_url: Option<String>,
    generate_ideas_path: Option<String>,
    request_timeout_secs: Option<u64>,
}

pub fn load_api_config() -> ApiConfig {
    let file = fs::read_to_string(CONFIG_FILE).ok();
    resolve_api_config(file.as_deref(), |key| std::env::var(key).ok())
}

fn resolve_api_config(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> ApiConfig {
    let mut config = ApiConfig::default();

    if let Some(raw) = file {
        match toml::from_str::<FileConfig>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.base_url {
                    config.base_url = v;
                }
                if let Some(v) = file_cfg.generate_ideas_path {
                    config.generate_ideas_path = v;
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    config.request_timeout_secs = Some(v);
                }
            }
            Err(err) => warn!(error = %err, "ignoring malformed {CONFIG_FILE}"),
        }
    }

    if let Some(v) = env("IDEAS_API_BASE_URL") {
        config.base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        config.base_url = v;
    }

    if let Some(v) = env("IDEAS_API_GENERATE_PATH") {
        config.generate_ideas_path = v;
    }
    if let Some(v) = env("APP__API_GENERATE_PATH") {
        config.generate_ideas_path = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            config.request_timeout_secs = Some(parsed);
        }
    }

    config
}

/// Joins a base URL and an endpoint path with exactly one slash between them.
pub fn join_endpoint(base_url: &str, path: &str) -> String {
    let base_url = base_url.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');

    if path.is_empty() {
        return base_url.to_string();
    }

    format!("{base_url}/{path}")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
