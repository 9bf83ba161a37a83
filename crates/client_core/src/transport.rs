//! reqwest-backed implementation of the idea generation backend.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Idea,
    error::GenerateError,
    protocol::{BackendApiResponse, GenerateIdeasRequest},
};
use tracing::{debug, warn};
use url::Url;

use crate::{config::ApiConfig, IdeasBackend};

pub struct HttpIdeasBackend {
    http: Client,
    endpoint: Url,
}

impl HttpIdeasBackend {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let endpoint = config.endpoint_url()?;
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("failed to build HTTP client")?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl IdeasBackend for HttpIdeasBackend {
    async fn generate_ideas(&self, business_type: &str) -> Result<Vec<Idea>, GenerateError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GenerateIdeasRequest {
                business_type: business_type.to_string(),
            })
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, error = %err, "idea request got no response");
                GenerateError::ConnectionError
            })?;

        let status = response.status();
        debug!(endpoint = %self.endpoint, status = status.as_u16(), "idea request answered");
        if !status.is_success() {
            return Err(GenerateError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|err| {
            warn!(endpoint = %self.endpoint, error = %err, "failed to read idea response body");
            GenerateError::ConnectionError
        })?;

        let parsed: BackendApiResponse = serde_json::from_slice(&body).map_err(|err| {
            debug!(error = %err, "idea response body is not the expected JSON shape");
            GenerateError::InvalidResponseShape
        })?;

        parsed
            .into_ideas()
            .ok_or(GenerateError::InvalidResponseShape)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
