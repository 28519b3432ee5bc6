use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use common::models::SignalResponse;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{error::FetchFailure, traits::SignalSource};

pub const SIGNAL_PATH: &str = "/api/signal";

#[derive(Clone)]
pub struct SignalClient {
    client: Client,
    endpoint: Url,
}

impl SignalClient {
    pub fn new(origin: &Url, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint = origin
            .join(SIGNAL_PATH)
            .with_context(|| format!("Failed to build signal endpoint from {}", origin))?;

        let client = Client::builder()
            .user_agent("signal_viewer/0.1.0")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client.")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SignalSource for SignalClient {
    async fn fetch_signal(
        &self,
        symbol: &str,
        timeframe: &str,
    ) -> Result<SignalResponse, FetchFailure> {
        debug!("GET {} symbol={} timeframe={}", self.endpoint, symbol, timeframe);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("symbol", symbol), ("timeframe", timeframe)])
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        decode_signal(&body)
    }
}

/// Decodes a 2xx body. The backend answers some failures with 200 and
/// `{"error": "..."}`; those surface as [`FetchFailure::Backend`].
fn decode_signal(body: &str) -> Result<SignalResponse, FetchFailure> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchFailure::MalformedBody(e.to_string()))?;

    if value.get("signal").is_none() {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(FetchFailure::Backend(message.to_string()));
        }
    }

    serde_json::from_value(value).map_err(|e| FetchFailure::MalformedBody(e.to_string()))
}

// FastAPI puts the reason for a non-2xx answer in "detail".
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
