//! Form submission over HTTP.

use async_trait::async_trait;
use efile_core::FormPayload;
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::error::TransportError;

/// Submits a form payload and returns the raw response body.
///
/// Implementations must not inspect the HTTP status: error pages are still
/// bodies. Only failures to exchange the request at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, url: &str, payload: &FormPayload) -> Result<String, TransportError>;
}

/// reqwest-backed transport posting URL-encoded form data.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &SearchConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, url: &str, payload: &FormPayload) -> Result<String, TransportError> {
        let params: Vec<&str> = payload.non_empty_keys().collect();
        info!(url = %url, ?params, "submitting filing search");

        let resp = self.client.post(url).form(payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "search form returned non-success status");
        }

        let body = resp.text().await?;
        info!(bytes = body.len(), "received search results page");
        Ok(body)
    }
}
