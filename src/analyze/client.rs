//! reqwest client for the analyze endpoint

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

use super::{AnalyzeError, AnalyzeRequest, AnalyzeResponse, AnalyzeTransport};
use crate::error::MoodError;

/// Path of the analyze endpoint, resolved against the server's base URL
pub const ANALYZE_PATH: &str = "/analyze";

/// Mood server client
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AnalyzeClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &Url) -> Result<Self, MoodError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_http_client(http: reqwest::Client, base_url: &Url) -> Result<Self, MoodError> {
        // An absolute path replaces whatever path the base URL carries
        let endpoint = base_url
            .join(ANALYZE_PATH)
            .map_err(|e| MoodError::InvalidServerUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Serialize the request body for `text`
    pub fn build_request_body(&self, text: &str) -> Result<String, AnalyzeError> {
        serde_json::to_string(&AnalyzeRequest { text }).map_err(|e| AnalyzeError::Parse(e.to_string()))
    }
}

impl AnalyzeTransport for AnalyzeClient {
    /// POST `text` and decode the reply
    ///
    /// The HTTP status is not used to decide success: an error page fails
    /// to decode and a JSON error reply with the right shape is rendered.
    async fn analyze(&self, text: &str) -> Result<AnalyzeResponse, AnalyzeError> {
        let body = self.build_request_body(text)?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AnalyzeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered with status {}", self.endpoint, status);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnalyzeError::Network(e.to_string()))?;

        serde_json::from_slice::<AnalyzeResponse>(&bytes).map_err(|e| AnalyzeError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
