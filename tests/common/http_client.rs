//! HTTP client helpers for tests.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub const STATUS_HEADER: &str = "x-nestrank-status";

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    fn status_header(resp: &reqwest::Response) -> String {
        resp.headers()
            .get(STATUS_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string()
    }

    /// Fetches the ranked feed for the given query parameters.
    ///
    /// Returns the ranked articles together with the service status header.
    pub async fn articles(
        &self,
        params: &[(&str, &str)],
    ) -> Result<(Vec<RankedArticle>, String), TestClientError> {
        let resp = self
            .client
            .get(self.url("/api/articles"))
            .query(params)
            .send()
            .await?;

        let status_header = Self::status_header(&resp);

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            400 | 422 => Err(TestClientError::BadRequest(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    /// Fetches the branching story payload for a character.
    ///
    /// Returns the raw JSON value so tests can assert on the payload shape.
    pub async fn story_data(
        &self,
        params: &[(&str, &str)],
    ) -> Result<(serde_json::Value, String), TestClientError> {
        let resp = self
            .client
            .get(self.url("/api/story-data"))
            .query(params)
            .send()
            .await?;

        let status_header = Self::status_header(&resp);

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            400 | 422 => Err(TestClientError::BadRequest(resp.text().await?)),
            404 => Err(TestClientError::NotFound(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn hello(&self) -> Result<HelloResponse, TestClientError> {
        let resp = self.client.get(self.url("/api/hello")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

/// One entry of the ranked feed as seen on the wire.
///
/// Article fields are flattened alongside the score; unknown fields are ignored so
/// the struct only names what the tests assert on.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankedArticle {
    pub id: i64,
    pub title: String,
    pub trimester: String,
    pub age_group: String,
    pub heat_sensitive: bool,
    pub pollution_sensitive: bool,
    pub relevance_score: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentStatus {
    pub http: String,
    pub catalog: String,
    pub model: String,
    pub model_mode: String,
    pub articles: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

impl ReadyResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_building() {
        let client = TestClient::new("http://localhost:8080");
        assert_eq!(client.url("/healthz"), "http://localhost:8080/healthz");
        assert_eq!(client.url("healthz"), "http://localhost:8080/healthz");
    }

    #[test]
    fn test_client_exposes_endpoints() {
        let client = TestClient::new("http://localhost:8080");
        std::mem::drop(client.health());
        std::mem::drop(client.ready());
        std::mem::drop(client.hello());
        std::mem::drop(client.articles(&[("trimester", "1")]));
        std::mem::drop(client.story_data(&[("character_id", "1")]));
    }

    #[test]
    fn test_ready_response_is_ok_helper() {
        let ready = ReadyResponse {
            status: "ok".to_string(),
            components: ComponentStatus {
                http: "ready".to_string(),
                catalog: "ready".to_string(),
                model: "ready".to_string(),
                model_mode: "stub".to_string(),
                articles: 8,
            },
        };
        assert!(ready.is_ok());
    }
}
