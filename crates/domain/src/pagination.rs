// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The paginated list envelope returned by every list endpoint.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Position of a page within the full result set.
///
/// Aggregates computed over the whole result set (such as `total_cost` on
/// item movements) are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    /// The 1-based page returned.
    pub current_page: u32,
    /// The last page, 0 when the result set is empty.
    pub last_page: u32,
    /// Page size requested by the server.
    pub per_page: u32,
    /// Number of records across all pages.
    pub total: u64,
    /// 1-based position of the first record on this page.
    #[serde(default)]
    pub from: Option<u64>,
    /// 1-based position of the last record on this page.
    #[serde(default)]
    pub to: Option<u64>,
    /// Additional aggregate fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageMeta {
    /// Computes the metadata for one page of a result set.
    ///
    /// `from`/`to` are `None` when the page holds no records.
    ///
    /// # Arguments
    ///
    /// * `page` - The 1-based page
    /// * `per_page` - The page size
    /// * `total` - Number of records across all pages
    #[must_use]
    pub fn for_page(page: u32, per_page: u32, total: u64) -> Self {
        let per_page_wide: u64 = u64::from(per_page.max(1));
        let last_page: u32 = u32::try_from(total.div_ceil(per_page_wide)).unwrap_or(u32::MAX);
        let first_index: u64 = u64::from(page.saturating_sub(1)) * per_page_wide;

        let (from, to): (Option<u64>, Option<u64>) = if first_index < total {
            let to: u64 = (first_index + per_page_wide).min(total);
            (Some(first_index + 1), Some(to))
        } else {
            (None, None)
        };

        Self {
            current_page: page,
            last_page,
            per_page,
            total,
            from,
            to,
            extra: Map::new(),
        }
    }

    /// Returns an aggregate field as a float, if present and numeric.
    #[must_use]
    pub fn aggregate_f64(&self, name: &str) -> Option<f64> {
        self.extra.get(name).and_then(|value| match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.parse().ok(),
            _ => None,
        })
    }

    /// Returns whether a page after this one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Returns whether a page before this one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// A page of records plus its position in the result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The records on this page, in server order.
    pub data: Vec<T>,
    /// Position of this page.
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Creates an empty first page.
    #[must_use]
    pub fn empty(per_page: u32) -> Self {
        Self {
            data: Vec::new(),
            meta: PageMeta::for_page(1, per_page, 0),
        }
    }

    /// Validates the envelope against its own metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The page holds more records than `per_page`
    /// - `current_page` lies outside `[1, last_page]` for a non-empty result
    /// - `last_page` is above 1 for an empty result set (servers report
    ///   either 0 or 1 there; both are accepted)
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        let len: usize = self.data.len();
        if len > self.meta.per_page as usize {
            return Err(DomainError::InconsistentPage {
                reason: format!(
                    "page holds {len} records but per_page is {}",
                    self.meta.per_page
                ),
            });
        }

        if self.meta.total == 0 {
            if self.meta.last_page != 0 && self.meta.last_page != 1 {
                return Err(DomainError::InconsistentPage {
                    reason: format!("empty result set reports last_page {}", self.meta.last_page),
                });
            }
            return Ok(());
        }

        if self.meta.current_page == 0 || self.meta.current_page > self.meta.last_page {
            return Err(DomainError::InconsistentPage {
                reason: format!(
                    "current_page {} outside [1, {}]",
                    self.meta.current_page, self.meta.last_page
                ),
            });
        }

        Ok(())
    }

    /// Maps every record, keeping the metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
