// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The asynchronous driver around [`apply`].
//!
//! The controller owns one list's query state, runs the search debounce
//! timer, and issues fetches against a [`ListSource`]. Fetches may
//! overlap. Each gets a sequence number when issued, and a response is
//! only applied if no newer response has been applied before it.

use crate::apply::apply;
use crate::command::ListCommand;
use crate::error::CoreError;
use crate::source::ListSource;
use crate::state::{Effect, ListQueryConfig, ListQueryState, ListView, SortIndicator, Transition};
use maintdesk_api::Outcome;
use maintdesk_domain::{FilterValue, ListQuery, Paginated};
use std::sync::{Arc, Weak};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct Inner {
    state: ListQueryState,
    /// Sequence number of the newest issued fetch.
    issued: u64,
    /// Sequence number of the newest applied response.
    applied: u64,
    /// Bumped every time the debounce is re-armed.
    debounce_generation: u64,
    debounce: Option<JoinHandle<()>>,
    in_flight: Vec<JoinHandle<()>>,
}

struct Shared<S: ListSource> {
    source: S,
    config: ListQueryConfig,
    inner: Mutex<Inner>,
    view: watch::Sender<ListView<S::Item>>,
}

impl<S: ListSource> Shared<S> {
    /// Applies a command under the lock and carries out its effect.
    fn dispatch_locked(
        self: &Arc<Self>,
        inner: &mut Inner,
        command: ListCommand,
    ) -> Result<(), CoreError> {
        let transition: Transition = apply(&inner.state, command, &self.config)?;
        inner.state = transition.new_state;

        match transition.effect {
            Effect::None => {}
            Effect::ArmDebounce => self.arm_debounce(inner),
            Effect::Fetch(query) => self.launch_fetch(inner, query),
        }
        Ok(())
    }

    fn arm_debounce(self: &Arc<Self>, inner: &mut Inner) {
        if let Some(pending) = inner.debounce.take() {
            pending.abort();
        }
        inner.debounce_generation += 1;

        let generation: u64 = inner.debounce_generation;
        let weak: Weak<Self> = Arc::downgrade(self);
        let delay: std::time::Duration = self.config.search_debounce();
        inner.debounce = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = weak.upgrade() {
                shared.settle_search(generation).await;
            }
        }));
    }

    async fn settle_search(self: &Arc<Self>, generation: u64) {
        let mut inner = self.inner.lock().await;
        if inner.debounce_generation != generation {
            return;
        }
        inner.debounce = None;
        // Settling cannot be rejected.
        if let Err(err) = self.dispatch_locked(&mut inner, ListCommand::SettleSearch) {
            warn!(error = %err, "Search settle rejected");
        }
    }

    fn launch_fetch(self: &Arc<Self>, inner: &mut Inner, query: ListQuery) {
        inner.issued += 1;
        let seq: u64 = inner.issued;
        debug!(seq, page = query.page, "Issuing list fetch");

        self.view.send_modify(|view| {
            view.is_loading = true;
            view.query = query.clone();
        });

        inner.in_flight.retain(|handle| !handle.is_finished());
        let shared: Arc<Self> = Arc::clone(self);
        inner.in_flight.push(tokio::spawn(async move {
            let outcome = shared.source.fetch(&query).await;
            shared.receive(seq, outcome).await;
        }));
    }

    async fn receive(&self, seq: u64, outcome: Outcome<Paginated<S::Item>>) {
        let mut inner = self.inner.lock().await;
        if seq <= inner.applied {
            debug!(seq, applied = inner.applied, "Discarding stale list response");
            return;
        }
        inner.applied = seq;
        let still_loading: bool = inner.issued > seq;

        self.view.send_modify(|view| {
            match outcome {
                Outcome::Success { data } => {
                    view.items = data.data;
                    view.meta = Some(data.meta);
                    view.error = None;
                }
                Outcome::Failure { error, .. } => {
                    warn!(seq, error = %error, "List fetch failed");
                    view.items = Vec::new();
                    view.meta = None;
                    view.error = Some(error);
                }
            }
            view.is_loading = still_loading;
        });
    }
}

/// Drives one filterable, sortable, paginated list.
///
/// Nothing is fetched on construction; call [`ListController::refresh`]
/// to load the first page. Must be used inside a Tokio runtime.
pub struct ListController<S: ListSource> {
    shared: Arc<Shared<S>>,
}

impl<S: ListSource> ListController<S> {
    /// Creates a controller whose state comes from its configuration.
    ///
    /// # Arguments
    ///
    /// * `source` - Where pages are fetched from
    /// * `config` - Initial sort, filters and debounce
    #[must_use]
    pub fn new(source: S, config: ListQueryConfig) -> Self {
        let state: ListQueryState = ListQueryState::new(&config);
        Self::with_state(source, config, state)
    }

    /// Creates a controller starting from an explicit state, e.g. one
    /// restored from a URL or command line.
    #[must_use]
    pub fn with_state(source: S, config: ListQueryConfig, state: ListQueryState) -> Self {
        let (view, _) = watch::channel(ListView::new(state.compose()));
        Self {
            shared: Arc::new(Shared {
                source,
                config,
                inner: Mutex::new(Inner {
                    state,
                    issued: 0,
                    applied: 0,
                    debounce_generation: 0,
                    debounce: None,
                    in_flight: Vec::new(),
                }),
                view,
            }),
        }
    }

    /// Applies a command and starts whatever it requires.
    ///
    /// Returns once the command is applied; a fetch it starts completes
    /// in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if the command carries an invalid value. The state
    /// is left unchanged.
    pub async fn dispatch(&self, command: ListCommand) -> Result<(), CoreError> {
        let mut inner = self.shared.inner.lock().await;
        self.shared.dispatch_locked(&mut inner, command)
    }

    /// Jumps to a page.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is 0.
    pub async fn go_to_page(&self, page: u32) -> Result<(), CoreError> {
        self.dispatch(ListCommand::GoToPage(page)).await
    }

    /// Records a search keystroke and re-arms the debounce.
    pub async fn edit_search(&self, input: &str) {
        if let Err(err) = self
            .dispatch(ListCommand::EditSearch(input.to_string()))
            .await
        {
            warn!(error = %err, "Search edit rejected");
        }
    }

    /// Clicks a sortable column header.
    ///
    /// # Errors
    ///
    /// Returns an error if `field` is blank.
    pub async fn toggle_sort(&self, field: &str) -> Result<(), CoreError> {
        self.dispatch(ListCommand::ToggleSort(field.to_string()))
            .await
    }

    /// Sets or clears one additional filter.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is blank.
    pub async fn set_filter(
        &self,
        name: &str,
        value: Option<FilterValue>,
    ) -> Result<(), CoreError> {
        self.dispatch(ListCommand::SetFilter {
            name: name.to_string(),
            value,
        })
        .await
    }

    /// Re-issues the current query unchanged, e.g. after a mutation.
    pub async fn refresh(&self) {
        if let Err(err) = self.dispatch(ListCommand::Refresh).await {
            warn!(error = %err, "Refresh rejected");
        }
    }

    /// Returns a copy of the current query state.
    pub async fn query_state(&self) -> ListQueryState {
        self.shared.inner.lock().await.state.clone()
    }

    /// Returns how a column header should render its sort icon.
    pub async fn sort_indicator(&self, field: &str) -> SortIndicator {
        self.shared.inner.lock().await.state.sort_indicator(field)
    }

    /// Returns the current view.
    #[must_use]
    pub fn snapshot(&self) -> ListView<S::Item> {
        self.shared.view.borrow().clone()
    }

    /// Subscribes to view changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListView<S::Item>> {
        self.shared.view.subscribe()
    }

    /// Waits until every issued fetch has resolved.
    ///
    /// A pending search debounce is not waited for.
    pub async fn settle(&self) {
        loop {
            let pending: Vec<JoinHandle<()>> =
                std::mem::take(&mut self.shared.inner.lock().await.in_flight);
            if pending.is_empty() {
                return;
            }
            for handle in pending {
                if let Err(err) = handle.await {
                    warn!(error = %err, "List fetch task ended abnormally");
                }
            }
        }
    }
}

impl<S: ListSource> std::fmt::Debug for ListController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("config", &self.shared.config)
            .finish_non_exhaustive()
    }
}

impl<S: ListSource> Drop for ListController<S> {
    fn drop(&mut self) {
        // Best effort: the timer task only holds a weak reference.
        if let Ok(mut inner) = self.shared.inner.try_lock() {
            if let Some(pending) = inner.debounce.take() {
                pending.abort();
            }
        }
    }
}
