// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use maintdesk_domain::{FilterValue, ListQuery, PageMeta, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Quiet period after the last search keystroke before the search settles.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

const fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

/// Construction-time settings of a list.
///
/// Everything a list starts from lives here rather than in ambient state,
/// so a screen's initial filters can be stored and restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQueryConfig {
    /// Direction applied when a new column is selected.
    #[serde(default)]
    pub default_sort_direction: SortDirection,
    /// Column sorted on before the user clicks any header.
    #[serde(default)]
    pub initial_sort_by: Option<String>,
    /// Search debounce in milliseconds.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Additional filters applied from the start.
    #[serde(default)]
    pub initial_filters: BTreeMap<String, FilterValue>,
}

impl Default for ListQueryConfig {
    fn default() -> Self {
        Self {
            default_sort_direction: SortDirection::default(),
            initial_sort_by: None,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            initial_filters: BTreeMap::new(),
        }
    }
}

impl ListQueryConfig {
    /// Returns the search debounce as a duration.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Everything that determines which page of records a list shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQueryState {
    /// The 1-based current page.
    pub page: u32,
    /// The raw search input, updated on every keystroke.
    pub search_input: String,
    /// The settled search, the only search value ever sent.
    pub search: String,
    /// The active sort column.
    pub sort_by: Option<String>,
    /// Direction for `sort_by`.
    pub sort_direction: SortDirection,
    /// Resource-specific filters keyed by query parameter name.
    pub filters: BTreeMap<String, FilterValue>,
}

impl ListQueryState {
    /// Creates the initial state of a list.
    ///
    /// # Arguments
    ///
    /// * `config` - The list's construction-time settings
    #[must_use]
    pub fn new(config: &ListQueryConfig) -> Self {
        Self {
            page: 1,
            search_input: String::new(),
            search: String::new(),
            sort_by: config
                .initial_sort_by
                .clone()
                .filter(|field| !field.trim().is_empty()),
            sort_direction: config.default_sort_direction,
            filters: config.initial_filters.clone(),
        }
    }

    /// Composes the filter object sent with the next fetch.
    #[must_use]
    pub fn compose(&self) -> ListQuery {
        let search: &str = self.search.trim();
        ListQuery {
            page: self.page,
            search: (!search.is_empty()).then(|| search.to_string()),
            sort_by: self.sort_by.clone(),
            sort_direction: self.sort_direction,
            filters: self.filters.clone(),
        }
    }

    /// Returns how a column header should render its sort icon.
    #[must_use]
    pub fn sort_indicator(&self, field: &str) -> SortIndicator {
        match &self.sort_by {
            Some(active) if active == field => match self.sort_direction {
                SortDirection::Asc => SortIndicator::Ascending,
                SortDirection::Desc => SortIndicator::Descending,
            },
            _ => SortIndicator::Inactive,
        }
    }
}

/// The sort state of one column, as shown in its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIndicator {
    /// Not the active column.
    Inactive,
    /// Active, smallest first.
    Ascending,
    /// Active, largest first.
    Descending,
}

/// What a list screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<T> {
    /// The records of the last applied response. Empty after a failure.
    pub items: Vec<T>,
    /// Page metadata of the last applied response.
    pub meta: Option<PageMeta>,
    /// Whether the newest issued fetch is still outstanding.
    pub is_loading: bool,
    /// The failure message of the last applied response.
    pub error: Option<String>,
    /// The filter object of the newest issued fetch.
    pub query: ListQuery,
}

impl<T> ListView<T> {
    /// Creates an empty, idle view.
    #[must_use]
    pub fn new(query: ListQuery) -> Self {
        Self {
            items: Vec::new(),
            meta: None,
            is_loading: false,
            error: None,
            query,
        }
    }
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the command.
    pub new_state: ListQueryState,
    /// The single side effect the command requires.
    pub effect: Effect,
}

/// A side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Restart the search debounce timer.
    ArmDebounce,
    /// Issue exactly one fetch with this filter object.
    Fetch(ListQuery),
}
