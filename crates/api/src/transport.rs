// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The HTTP seam between repositories and the network.

use crate::error::ApiError;
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP verbs used by the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read.
    Get,
    /// Create.
    Post,
    /// Replace or patch.
    Put,
    /// Remove.
    Delete,
}

impl Method {
    /// Returns the verb as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One HTTP request, independent of any client library.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// The verb.
    pub method: Method,
    /// Path relative to the API base URL, starting with `/`.
    pub path: String,
    /// Query parameters, already stripped of absent values.
    pub query: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a body-less request.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a `GET` request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Creates a `DELETE` request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends requests and returns decoded JSON bodies.
///
/// Implementations return `Ok` only for 2xx responses. An empty body
/// decodes to [`Value::Null`].
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Performs one request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// that is not JSON.
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// The `{ "data": ... }` wrapper used by single-record and option endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Decodes a bare body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not match `T`.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(body)?)
}

/// Decodes a `{ "data": ... }` body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not an envelope around `T`.
pub fn decode_data<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_value(body)?;
    Ok(envelope.data)
}
