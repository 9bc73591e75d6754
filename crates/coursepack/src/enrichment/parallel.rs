//! Parallel search/task API client.
//!
//! Two endpoints, both authenticated with `x-api-key`:
//! - `POST {base}/search`: one call per resource
//! - `POST {base}/tasks/runs`: one call per week to find papers
//!
//! A call succeeds only on HTTP 200 with a JSON body. Everything else is an
//! [`EnrichError`].

use crate::acquisition::http_client::HttpClient;
use crate::config::Config;
use crate::error::EnrichError;
use serde_json::{json, Value};
use std::time::Duration;

/// Search processor tier.
const SEARCH_PROCESSOR: &str = "base";
/// Task processor tier; "core" accepts an `auto` output schema.
const TASK_PROCESSOR: &str = "core";
const SEARCH_MAX_RESULTS: u32 = 3;
const SEARCH_MAX_CHARS_PER_RESULT: u32 = 1500;

/// Authenticated client for the Parallel API.
#[derive(Clone)]
pub struct ParallelClient {
    http: HttpClient,
    base: String,
    api_key: String,
    search_timeout: Duration,
    task_timeout: Duration,
}

impl ParallelClient {
    /// Build a client from config. `None` when no API key is configured.
    pub fn from_config(http: HttpClient, config: &Config) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            http,
            base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            search_timeout: config.search_timeout,
            task_timeout: config.task_timeout,
        })
    }

    /// Run a search with a natural-language objective.
    pub async fn search(&self, objective: &str) -> Result<Value, EnrichError> {
        let body = json!({
            "objective": objective,
            "processor": SEARCH_PROCESSOR,
            "max_results": SEARCH_MAX_RESULTS,
            "max_chars_per_result": SEARCH_MAX_CHARS_PER_RESULT,
        });
        self.post("search", &body, self.search_timeout).await
    }

    /// Start a task run with a free-form prompt.
    pub async fn run_task(&self, input: &str) -> Result<Value, EnrichError> {
        let body = json!({
            "input": input,
            "processor": TASK_PROCESSOR,
            "task_spec": {
                "output_schema": { "type": "auto" }
            },
        });
        self.post("tasks/runs", &body, self.task_timeout).await
    }

    async fn post(
        &self,
        path: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<Value, EnrichError> {
        let url = format!("{}/{path}", self.base);
        let resp = self
            .http
            .post_json(&url, body, &[("x-api-key", self.api_key.as_str())], timeout)
            .await
            .map_err(|e| EnrichError::Transport(format!("{e:#}")))?;

        if resp.status != 200 {
            return Err(EnrichError::Status(resp.status));
        }
        Ok(serde_json::from_str(&resp.body)?)
    }
}
