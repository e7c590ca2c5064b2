// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `reqwest`-backed transport.

use crate::error::ApiError;
use crate::transport::{ApiRequest, HttpTransport, Method};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `https://acme.example.com/api`.
    pub base_url: String,
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Static bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration with the default timeout and no token.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }
}

/// Adds `http://` when no scheme is given and trims trailing slashes.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed: &str = raw.trim().trim_end_matches('/');
    let normalized: String = if trimmed.starts_with("http://") || trimmed.starts_with("https://")
    {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    if normalized != raw {
        debug!(from = raw, to = %normalized, "Normalized API base URL");
    }
    normalized
}

/// HTTP transport over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Builds a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the underlying client cannot
    /// be constructed (e.g. no TLS backend).
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url: String = normalize_base_url(&config.base_url);
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::InvalidRequest {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        info!(base_url = %base_url, "Created API client");

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a request path onto the base URL.
    #[must_use]
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    const fn to_reqwest(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url: String = self.build_url(&request.path);
        debug!(method = %request.method, url = %url, "Sending API request");

        let mut builder: reqwest::RequestBuilder = self
            .client
            .request(Self::to_reqwest(request.method), &url)
            .header(ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response: reqwest::Response =
            builder.send().await.map_err(|e| ApiError::Transport {
                message: e.to_string(),
            })?;
        let status: reqwest::StatusCode = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::Transport {
            message: e.to_string(),
        })?;

        if status.is_success() {
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_slice(&body)?);
        }

        warn!(
            method = %request.method,
            url = %url,
            status = status.as_u16(),
            "API request failed"
        );
        Err(ApiError::from_response(
            status.as_u16(),
            &body,
            &request.path,
        ))
    }
}
