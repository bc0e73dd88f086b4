// Nexus API client. Read-only; one request per call, no retries.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::UpstreamConfig;
use crate::models::{Service, UptimeHistory};
use crate::version;

/// Any way an upstream fetch can fail. All of them render as a single "failed to fetch" state.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned {0}")]
    Status(StatusCode),
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid upstream base url: {0}")]
    InvalidBaseUrl(String),
}

pub struct NexusClient {
    client: Client,
    base_url: Url,
}

impl NexusClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(config.base_url.clone()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(version::user_agent())
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET /api/services/{id}/uptime
    #[instrument(skip(self), fields(upstream = "nexus", operation = "fetch_uptime"))]
    pub async fn fetch_uptime(&self, service_id: &str) -> Result<UptimeHistory, FetchError> {
        self.get_json(&["api", "services", service_id, "uptime"])
            .await
    }

    /// GET /api/services. A `null` body is an empty list.
    #[instrument(skip(self), fields(upstream = "nexus", operation = "fetch_services"))]
    pub async fn fetch_services(&self) -> Result<Vec<Service>, FetchError> {
        let services: Option<Vec<Service>> = self.get_json(&["api", "services"]).await?;
        Ok(services.unwrap_or_default())
    }

    /// GET /api/groups. A `null` body is an empty list.
    #[instrument(skip(self), fields(upstream = "nexus", operation = "fetch_groups"))]
    pub async fn fetch_groups(&self) -> Result<Vec<String>, FetchError> {
        let groups: Option<Vec<String>> = self.get_json(&["api", "groups"]).await?;
        Ok(groups.unwrap_or_default())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, FetchError> {
        let url = self.endpoint(segments)?;
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
