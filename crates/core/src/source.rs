// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use maintdesk_api::{Manager, Outcome, Resource};
use maintdesk_domain::{ListQuery, Paginated};

/// Something a list controller can fetch pages from.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    /// The record type listed.
    type Item: Clone + Send + Sync + 'static;

    /// Fetches one page. Never fails; failures come back as
    /// [`Outcome::Failure`].
    async fn fetch(&self, query: &ListQuery) -> Outcome<Paginated<Self::Item>>;
}

#[async_trait]
impl<R: Resource> ListSource for Manager<R> {
    type Item = R::Entity;

    async fn fetch(&self, query: &ListQuery) -> Outcome<Paginated<Self::Item>> {
        self.get_page(query).await
    }
}
