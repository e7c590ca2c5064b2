// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use maintdesk_api::Outcome;
use maintdesk_domain::{ListQuery, PageMeta, Paginated, SortDirection};

use crate::{ListQueryConfig, ListSource};

/// A list source answering with one item per page that names the query it
/// was fetched with, e.g. `"pump|p2"`.
#[derive(Debug, Default)]
pub struct FakeSource {
    queries: Mutex<Vec<ListQuery>>,
    delays: Mutex<HashMap<u32, Duration>>,
    failure: Mutex<Option<String>>,
}

impl FakeSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes fetches of `page` take `delay` to resolve.
    pub fn delay_page(&self, page: u32, delay: Duration) {
        self.delays.lock().unwrap().insert(page, delay);
    }

    /// Makes every following fetch fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

pub fn item_for(query: &ListQuery) -> String {
    format!(
        "{}|p{}",
        query.search.as_deref().unwrap_or_default(),
        query.page
    )
}

#[async_trait]
impl ListSource for Arc<FakeSource> {
    type Item = String;

    async fn fetch(&self, query: &ListQuery) -> Outcome<Paginated<String>> {
        self.queries.lock().unwrap().push(query.clone());
        let delay: Option<Duration> = self.delays.lock().unwrap().get(&query.page).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure: Option<String> = self.failure.lock().unwrap().clone();
        match failure {
            Some(message) => Outcome::failure(&message),
            None => Outcome::success(Paginated {
                data: vec![item_for(query)],
                meta: PageMeta::for_page(query.page, 15, 45),
            }),
        }
    }
}

pub fn create_test_config() -> ListQueryConfig {
    ListQueryConfig {
        default_sort_direction: SortDirection::Desc,
        ..ListQueryConfig::default()
    }
}
