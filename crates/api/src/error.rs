// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the resource access layer.

use maintdesk_domain::ValidationErrors;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Failures raised by the transport and repositories.
///
/// Managers never let these escape; they are folded into
/// [`crate::Outcome::Failure`] through [`describe_error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Transport failure: {message}")]
    Transport {
        /// The underlying client error.
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The server's message, or the status reason.
        message: String,
    },

    /// The server rejected the payload with field-level messages.
    #[error("Validation failed: {message}")]
    Validation {
        /// The server's summary message.
        message: String,
        /// The first message for each rejected field.
        errors: ValidationErrors,
    },

    /// The addressed record or endpoint does not exist.
    #[error("Not found: {what}")]
    NotFound {
        /// What was looked up, e.g. `incident 14` or a request path.
        what: String,
        /// The server's message, if it sent one.
        message: Option<String>,
    },

    /// A 2xx body did not match the expected shape.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// The decoder error.
        message: String,
    },

    /// The request could not be built.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Why the request was rejected locally.
        message: String,
    },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// The error body shape used by the server for non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, Vec<String>>,
}

impl ApiError {
    /// Translates a non-2xx response into an error.
    ///
    /// # Arguments
    ///
    /// * `status` - The HTTP status code
    /// * `body` - The raw response body, possibly empty or not JSON
    /// * `path` - The request path, recorded as what a 404 was looking for
    #[must_use]
    pub fn from_response(status: u16, body: &[u8], path: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let message: Option<String> = parsed.message.filter(|m| !m.trim().is_empty());

        match status {
            404 => Self::NotFound {
                what: path.to_string(),
                message,
            },
            422 => Self::Validation {
                message: message.unwrap_or_else(|| String::from("The given data was invalid.")),
                errors: parsed
                    .errors
                    .into_iter()
                    .filter_map(|(field, messages)| {
                        messages.into_iter().next().map(|first| (field, first))
                    })
                    .collect(),
            },
            _ => Self::Status {
                status,
                message: message.unwrap_or_else(|| format!("HTTP {status}")),
            },
        }
    }

    /// Rewrites a not-found into one naming the record.
    #[must_use]
    pub fn for_record(self, resource: &str, id: i64) -> Self {
        match self {
            Self::NotFound { .. } => Self::NotFound {
                what: format!("{resource} {id}"),
                message: None,
            },
            other => other,
        }
    }

    /// Returns the field-level messages of a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Turns any error into a sentence fit for display.
///
/// The result is never empty. Server-provided messages are preferred for
/// client errors; transport and server failures get generic wording.
#[must_use]
pub fn describe_error(err: &ApiError) -> String {
    match err {
        ApiError::Transport { .. } => {
            String::from("Unable to reach the server. Check your connection and try again.")
        }
        ApiError::Status { status: 401, .. } => {
            String::from("Your session has expired. Please sign in again.")
        }
        ApiError::Status { status: 403, .. } => {
            String::from("You are not allowed to perform this action.")
        }
        ApiError::Status { status, .. } if *status >= 500 => {
            String::from("The server encountered an error. Please try again later.")
        }
        ApiError::Status { status, message } => {
            if message.trim().is_empty() {
                format!("The request failed (HTTP {status}).")
            } else {
                message.clone()
            }
        }
        ApiError::Validation { message, .. } => {
            if message.trim().is_empty() {
                String::from("The submitted data is invalid.")
            } else {
                message.clone()
            }
        }
        ApiError::NotFound {
            message: Some(message),
            ..
        } if !message.trim().is_empty() => message.clone(),
        ApiError::NotFound { what, .. } => format!("The requested {what} could not be found."),
        ApiError::Decode { .. } => {
            String::from("The server returned an unexpected response. Please try again.")
        }
        ApiError::InvalidRequest { message } => format!("The request could not be sent: {message}"),
    }
}
