// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The uniform result every manager operation resolves to.

use crate::error::{ApiError, describe_error};
use maintdesk_domain::ValidationErrors;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Either the operation's data or a display-ready error.
///
/// Exactly one side is meaningful. On the wire this is
/// `{"success": true, "data": ...}` or
/// `{"success": false, "error": "...", "validationErrors": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The operation succeeded.
    Success {
        /// The operation's result.
        data: T,
    },
    /// The operation failed.
    Failure {
        /// A non-empty, display-ready message.
        error: String,
        /// Field-level messages for form re-display, on validation failures.
        validation_errors: Option<ValidationErrors>,
    },
}

impl<T> Outcome<T> {
    /// Wraps a successful result.
    pub const fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Wraps a failure message. An empty message is replaced with a generic one.
    pub fn failure(error: &str) -> Self {
        let error: String = if error.trim().is_empty() {
            String::from("An unexpected error occurred.")
        } else {
            error.to_string()
        };
        Self::Failure {
            error,
            validation_errors: None,
        }
    }

    /// Converts an error into a failure, keeping field-level messages.
    pub fn from_error(err: &ApiError) -> Self {
        Self::Failure {
            error: describe_error(err),
            validation_errors: err.validation_errors().cloned(),
        }
    }

    /// Converts a repository result.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::from_error(&err),
        }
    }

    /// Returns whether this is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the data of a success.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the message of a failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error.as_str()),
        }
    }

    /// Returns the field-level messages of a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Failure {
                validation_errors: Some(errors),
                ..
            } => Some(errors),
            _ => None,
        }
    }

    /// Maps the data of a success.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success { data } => Outcome::Success { data: f(data) },
            Self::Failure {
                error,
                validation_errors,
            } => Outcome::Failure {
                error,
                validation_errors,
            },
        }
    }

    /// Converts into a standard result, dropping field-level messages.
    ///
    /// # Errors
    ///
    /// Returns the failure message if this is a failure.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { error, .. } => Err(error),
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data } => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Self::Failure {
                error,
                validation_errors: None,
            } => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
            Self::Failure {
                error,
                validation_errors: Some(errors),
            } => {
                let mut state = serializer.serialize_struct("Outcome", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.serialize_field("validationErrors", errors)?;
                state.end()
            }
        }
    }
}
