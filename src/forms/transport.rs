//! Network transport for form submissions

use crate::core::TransportError;
use async_trait::async_trait;
use serde_json::Value;

/// Sends a JSON body and decodes the JSON answer
///
/// Like a browser `fetch`, a non-2xx status is not an error by itself: the
/// body is decoded whatever the status, and only a missing response or a
/// non-JSON body fails.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError>;
}

/// [`Transport`] over a shared `reqwest` client
///
/// No timeout is configured; requests wait as long as the client default.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, TransportError> {
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let value = response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(%url, %status, "response decoded");
        Ok(value)
    }
}
