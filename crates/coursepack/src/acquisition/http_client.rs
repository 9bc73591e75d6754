//! Async HTTP client wrapping reqwest.
//!
//! One request per call: no retries and no backoff. A timeout is reported
//! like any other transport error, including one hit while reading the body.

use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;

/// Response from an HTTP request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// 4xx and 5xx responses.
    pub fn is_error_status(&self) -> bool {
        self.status >= 400
    }
}

/// HTTP client shared by the page fetcher and the enrichment API client.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client with a desktop browser user-agent.
    pub fn new() -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET request.
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse> {
        let r = self.client.get(url).timeout(timeout).send().await?;
        let status = r.status().as_u16();
        let body = r
            .text()
            .await
            .with_context(|| format!("failed to read response body from {url}"))?;

        Ok(HttpResponse { status, body })
    }

    /// POST a JSON body with extra headers.
    ///
    /// `Content-Type: application/json` is set by reqwest. Non-2xx statuses
    /// come back as a normal response; only transport failures are `Err`.
    pub async fn post_json(
        &self,
        url: &str,
        body: &Value,
        extra_headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<HttpResponse> {
        let mut builder = self.client.post(url).timeout(timeout);

        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }

        let r = builder.json(body).send().await?;
        let status = r.status().as_u16();
        let body = r
            .text()
            .await
            .with_context(|| format!("failed to read response body from {url}"))?;

        Ok(HttpResponse { status, body })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
