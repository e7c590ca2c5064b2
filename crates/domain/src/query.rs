// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The generic list query and the query-string contract shared by every
//! filter object.
//!
//! Every list endpoint accepts the same core parameters (`page`, `search`,
//! `sort_by`, `sort_direction`) plus a handful of resource-specific scalar
//! filters. Absent values are never sent, and a sort direction is only
//! meaningful next to a sort field.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Ordering applied to the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(DomainError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// A scalar value carried in the bag of additional list filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A boolean switch, sent as `1`/`0`.
    Flag(bool),
    /// An integer, typically a foreign key such as `material_id`.
    Integer(i64),
    /// Free text or an enumerated machine value such as `open`.
    Text(String),
}

impl FilterValue {
    /// Returns the value as an integer when it is one, or when it is text
    /// that parses as one.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Flag(_) => None,
        }
    }

    /// Returns the value as text, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Integer(_) | Self::Flag(_) => None,
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("1"),
            Self::Flag(false) => f.write_str("0"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Anything that can be rendered into list-endpoint query parameters.
pub trait QueryFilter {
    /// Returns the `(name, value)` pairs to send, omitting absent fields.
    ///
    /// Implementations never emit `sort_direction` unless `sort_by` is set.
    fn query_pairs(&self) -> Vec<(String, String)>;
}

/// Accumulates query parameters, dropping absent values.
#[derive(Debug, Default)]
pub(crate) struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub(crate) fn push<V: std::fmt::Display>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.0.push((name.to_string(), value.to_string()));
        }
    }

    /// Empty or whitespace-only text is treated as absent.
    pub(crate) fn push_text(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.0.push((name.to_string(), value.to_string()));
        }
    }

    pub(crate) fn push_sort(&mut self, sort_by: Option<&str>, direction: Option<SortDirection>) {
        let Some(field) = sort_by.map(str::trim).filter(|f| !f.is_empty()) else {
            return;
        };
        self.0.push((String::from("sort_by"), field.to_string()));
        if let Some(direction) = direction {
            self.0
                .push((String::from("sort_direction"), direction.as_str().to_string()));
        }
    }

    pub(crate) fn finish(self) -> Vec<(String, String)> {
        self.0
    }
}

/// The fully composed filter object for one list request.
///
/// This is the resource-agnostic shape produced by the list controller;
/// each resource narrows it into its own filter object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// The 1-based page to fetch.
    pub page: u32,
    /// The settled free-text search, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// The active sort column, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Direction for `sort_by`. Ignored when no column is active.
    #[serde(default)]
    pub sort_direction: SortDirection,
    /// Resource-specific filters keyed by their query parameter name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, FilterValue>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: None,
            sort_by: None,
            sort_direction: SortDirection::default(),
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    /// Creates a query for the first page with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a named additional filter.
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&FilterValue> {
        self.filters.get(name)
    }

    /// Rejects any additional filter a resource does not accept.
    ///
    /// # Arguments
    ///
    /// * `resource` - The resource the query is narrowed for
    /// * `accepted` - The filter names the resource understands
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownFilter`] naming the first filter not in
    /// `accepted`.
    pub fn ensure_filters(
        &self,
        resource: &'static str,
        accepted: &[&str],
    ) -> Result<(), DomainError> {
        match self
            .filters
            .keys()
            .find(|name| !accepted.contains(&name.as_str()))
        {
            Some(name) => Err(DomainError::UnknownFilter {
                resource,
                name: name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Returns a named additional filter as an integer.
    ///
    /// Text that parses as an integer is accepted. Blank text counts as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidFilterValue`] if the value is a flag or
    /// non-numeric text.
    pub fn filter_integer(&self, name: &str) -> Result<Option<i64>, DomainError> {
        self.present_filter(name)
            .map(|value| {
                value
                    .as_integer()
                    .ok_or_else(|| DomainError::InvalidFilterValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
            })
            .transpose()
    }

    /// Returns a named additional filter parsed into a taxonomy value.
    ///
    /// Blank text counts as absent.
    ///
    /// # Errors
    ///
    /// Returns the parse error for text that names no known value, or
    /// [`DomainError::InvalidFilterValue`] if the value is not text.
    pub fn filter_parsed<T: FromStr<Err = DomainError>>(
        &self,
        name: &str,
    ) -> Result<Option<T>, DomainError> {
        self.present_filter(name)
            .map(|value| match value {
                FilterValue::Text(text) => text.trim().parse(),
                FilterValue::Integer(_) | FilterValue::Flag(_) => {
                    Err(DomainError::InvalidFilterValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
                }
            })
            .transpose()
    }

    fn present_filter(&self, name: &str) -> Option<&FilterValue> {
        self.filter(name)
            .filter(|value| value.as_text().is_none_or(|text| !text.trim().is_empty()))
    }

    /// Returns the sort direction only when a sort column is active.
    #[must_use]
    pub fn effective_sort_direction(&self) -> Option<SortDirection> {
        self.sort_by.as_ref().map(|_| self.sort_direction)
    }
}

impl QueryFilter for ListQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: QueryPairs = QueryPairs::default();
        pairs.push("page", Some(self.page));
        pairs.push_text("search", self.search.as_deref());
        pairs.push_sort(self.sort_by.as_deref(), Some(self.sort_direction));
        for (name, value) in &self.filters {
            match value {
                FilterValue::Text(text) => pairs.push_text(name, Some(text)),
                FilterValue::Integer(_) | FilterValue::Flag(_) => pairs.push(name, Some(value)),
            }
        }
        pairs.finish()
    }
}
