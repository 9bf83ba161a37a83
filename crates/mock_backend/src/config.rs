use std::fs;

use serde::Deserialize;
use tracing::warn;

const SETTINGS_FILE: &str = "mock_backend.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSettings {
    pub bind_addr: String,
    pub generate_ideas_path: String,
    pub force_status: Option<u16>,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            generate_ideas_path: "/api/generate-ideas".into(),
            force_status: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    generate_ideas_path: Option<String>,
    force_status: Option<u16>,
}

pub fn load_settings() -> MockSettings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    resolve_settings(file.as_deref(), |key| std::env::var(key).ok())
}

fn resolve_settings(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> MockSettings {
    let mut settings = MockSettings::default();

    if let Some(raw) = file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.bind_addr {
                    settings.bind_addr = v;
                }
                if let Some(v) = file_cfg.generate_ideas_path {
                    settings.generate_ideas_path = v;
                }
                if let Some(v) = file_cfg.force_status {
                    settings.force_status = Some(v);
                }
            }
            Err(err) => warn!(error = %err, "ignoring malformed {SETTINGS_FILE}"),
        }
    }

    if let Some(v) = env("MOCK_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = env("APP__GENERATE_IDEAS_PATH") {
        settings.generate_ideas_path = v;
    }

    if let Some(v) = env("APP__FORCE_STATUS") {
        if let Ok(parsed) = v.parse::<u16>() {
            settings.force_status = Some(parsed);
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
