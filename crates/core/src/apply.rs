// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::ListCommand;
use crate::error::CoreError;
use crate::state::{Effect, ListQueryConfig, ListQueryState, Transition};
use maintdesk_domain::{DomainError, FilterValue};

/// Applies a command to a list's query state.
///
/// This is a pure function: it never touches the network or a timer. The
/// returned [`Effect`] tells the caller what to do next. A command that
/// leaves every fetch-relevant value unchanged yields [`Effect::None`], so
/// each meaningful change produces exactly one fetch.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `config` - The list's construction-time settings
///
/// # Returns
///
/// * `Ok(Transition)` containing the new state and its effect
/// * `Err(CoreError)` if the command carries an invalid value
///
/// # Errors
///
/// Returns an error if:
/// - The requested page is 0
/// - The sort field is blank
/// - The filter name is blank
pub fn apply(
    state: &ListQueryState,
    command: ListCommand,
    config: &ListQueryConfig,
) -> Result<Transition, CoreError> {
    let mut new_state: ListQueryState = state.clone();

    let changed: Change = match command {
        ListCommand::GoToPage(page) => {
            if page == 0 {
                return Err(CoreError::DomainViolation(DomainError::InvalidPage(page)));
            }
            new_state.page = page;
            Change::fetch_if(new_state.page != state.page)
        }
        ListCommand::EditSearch(input) => {
            if input == state.search_input {
                Change::Nothing
            } else {
                new_state.search_input = input;
                Change::Debounce
            }
        }
        ListCommand::SettleSearch => {
            new_state.search.clone_from(&state.search_input);
            // Only the trimmed search is ever sent.
            if state.search_input.trim() == state.search.trim() {
                Change::Nothing
            } else {
                // The page resets only now, never while the user is typing.
                new_state.page = 1;
                Change::Fetch
            }
        }
        ListCommand::ToggleSort(field) => {
            let field: &str = field.trim();
            if field.is_empty() {
                return Err(CoreError::DomainViolation(DomainError::EmptySortField));
            }
            if state.sort_by.as_deref() == Some(field) {
                new_state.sort_direction = state.sort_direction.flipped();
            } else {
                new_state.sort_by = Some(field.to_string());
                new_state.sort_direction = config.default_sort_direction;
                new_state.page = 1;
            }
            Change::Fetch
        }
        ListCommand::SetFilter { name, value } => {
            let name: &str = name.trim();
            if name.is_empty() {
                return Err(CoreError::DomainViolation(DomainError::InvalidFilterName(
                    name.to_string(),
                )));
            }
            match value.filter(|v| !is_blank(v)) {
                Some(value) => {
                    new_state.filters.insert(name.to_string(), value);
                }
                None => {
                    new_state.filters.remove(name);
                }
            }
            if new_state.filters == state.filters {
                Change::Nothing
            } else {
                new_state.page = 1;
                Change::Fetch
            }
        }
        ListCommand::ClearFilters => {
            if state.filters.is_empty() {
                Change::Nothing
            } else {
                new_state.filters.clear();
                new_state.page = 1;
                Change::Fetch
            }
        }
        ListCommand::Refresh => Change::Fetch,
    };

    let effect: Effect = match changed {
        Change::Nothing => Effect::None,
        Change::Debounce => Effect::ArmDebounce,
        Change::Fetch => Effect::Fetch(new_state.compose()),
    };

    Ok(Transition { new_state, effect })
}

enum Change {
    Nothing,
    Debounce,
    Fetch,
}

impl Change {
    const fn fetch_if(changed: bool) -> Self {
        if changed { Self::Fetch } else { Self::Nothing }
    }
}

fn is_blank(value: &FilterValue) -> bool {
    value.as_text().is_some_and(|text| text.trim().is_empty())
}
