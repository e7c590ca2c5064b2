// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use maintdesk_domain::FilterValue;

/// A user or system intent against a list, as data only.
///
/// Commands are the only way to change a list's query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    /// Jump to a 1-based page.
    GoToPage(u32),
    /// Replace the raw search input. Takes effect once the debounce settles.
    EditSearch(String),
    /// Promote the raw search input to the settled search.
    SettleSearch,
    /// Click a sortable column header.
    ToggleSort(String),
    /// Set or clear one additional filter.
    SetFilter {
        /// The filter's query parameter name.
        name: String,
        /// The new value; `None` or blank text removes the filter.
        value: Option<FilterValue>,
    },
    /// Remove every additional filter.
    ClearFilters,
    /// Re-issue the current query unchanged.
    Refresh,
}
