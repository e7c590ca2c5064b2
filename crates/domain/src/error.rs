// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while building filters or parsing taxonomy values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Pages are 1-based.
    InvalidPage(u32),
    /// A sort field must be a non-empty column name.
    EmptySortField,
    /// A filter name must be a non-empty identifier.
    InvalidFilterName(String),
    /// A filter the resource does not understand.
    UnknownFilter {
        /// The resource the query was narrowed for.
        resource: &'static str,
        /// The rejected filter name.
        name: String,
    },
    /// A filter value of the wrong kind for its name.
    InvalidFilterValue {
        /// The filter name.
        name: String,
        /// The rejected value.
        value: String,
    },
    /// A status string did not match any known status.
    UnknownStatus {
        /// The resource the status belongs to.
        resource: &'static str,
        /// The value that failed to parse.
        value: String,
    },
    /// A severity string did not match any known severity.
    UnknownSeverity(String),
    /// A maintenance type string did not match any known type.
    UnknownMaintenanceType(String),
    /// A realization string did not match any known realization.
    UnknownRealization(String),
    /// A sort direction string was neither `asc` nor `desc`.
    UnknownSortDirection(String),
    /// Pagination metadata violates its own bounds.
    InconsistentPage {
        /// A description of the violated bound.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPage(page) => write!(f, "Invalid page {page}: pages start at 1"),
            Self::EmptySortField => write!(f, "Sort field cannot be empty"),
            Self::InvalidFilterName(name) => write!(f, "Invalid filter name: '{name}'"),
            Self::UnknownFilter { resource, name } => {
                write!(f, "Unknown {resource} filter: '{name}'")
            }
            Self::InvalidFilterValue { name, value } => {
                write!(f, "Invalid value for filter '{name}': '{value}'")
            }
            Self::UnknownStatus { resource, value } => {
                write!(f, "Unknown {resource} status: '{value}'")
            }
            Self::UnknownSeverity(value) => write!(f, "Unknown severity: '{value}'"),
            Self::UnknownMaintenanceType(value) => {
                write!(f, "Unknown maintenance type: '{value}'")
            }
            Self::UnknownRealization(value) => write!(f, "Unknown realization: '{value}'"),
            Self::UnknownSortDirection(value) => {
                write!(f, "Unknown sort direction: '{value}' (expected 'asc' or 'desc')")
            }
            Self::InconsistentPage { reason } => write!(f, "Inconsistent page: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
