// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! List query orchestration for maintdesk screens.
//!
//! [`apply`] is the pure state machine behind a filterable, sortable,
//! paginated list. [`ListController`] drives it against a [`ListSource`]
//! (any [`maintdesk_api::Manager`]), owning the search debounce and
//! discarding stale responses.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod controller;
mod error;
mod source;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use command::ListCommand;
pub use controller::ListController;
pub use error::CoreError;
pub use source::ListSource;
pub use state::{
    DEFAULT_SEARCH_DEBOUNCE_MS, Effect, ListQueryConfig, ListQueryState, ListView, SortIndicator,
    Transition,
};
