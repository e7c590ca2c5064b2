// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Managers wrap repository calls into [`Outcome`] values.
//!
//! A manager never returns an error to its caller. Every failure, from a
//! refused connection to a 422 validation response, becomes an
//! [`Outcome::Failure`] carrying a display-ready message. Managers hold no
//! state between calls.

mod incidents;
mod maintenances;
mod roles;

pub use incidents::IncidentFormOptions;
pub use maintenances::MaintenanceFormOptions;

use crate::error::ApiError;
use crate::outcome::Outcome;
use crate::repository::Repository;
use crate::resource::Resource;
use crate::transport::HttpTransport;
use maintdesk_domain::{ListQuery, Paginated, RecordId};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// The non-throwing operations of one resource.
pub struct Manager<R: Resource> {
    repository: Repository<R>,
}

impl<R: Resource> fmt::Debug for Manager<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("repository", &self.repository)
            .finish()
    }
}

impl<R: Resource> Clone for Manager<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R: Resource> Manager<R> {
    /// Creates a manager over a repository.
    #[must_use]
    pub const fn new(repository: Repository<R>) -> Self {
        Self { repository }
    }

    /// Creates a manager and its repository over a shared transport.
    #[must_use]
    pub fn from_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(Repository::new(transport))
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &Repository<R> {
        &self.repository
    }

    /// Lists one page of records.
    pub async fn get_all(&self, filters: &R::Filters) -> Outcome<Paginated<R::Entity>> {
        settle(R::NAME, "list", self.repository.list(filters).await)
    }

    /// Lists the page a generic list query describes.
    ///
    /// A query carrying a filter this resource does not understand, or a
    /// value it cannot parse, fails without sending a request.
    pub async fn get_page(&self, query: &ListQuery) -> Outcome<Paginated<R::Entity>> {
        match R::Filters::try_from(query) {
            Ok(filters) => self.get_all(&filters).await,
            Err(err) => settle(
                R::NAME,
                "list",
                Err(ApiError::InvalidRequest {
                    message: err.to_string(),
                }),
            ),
        }
    }

    /// Fetches one record.
    pub async fn get_by_id(&self, id: RecordId) -> Outcome<R::Entity> {
        settle(R::NAME, "get", self.repository.get(id).await)
    }

    /// Creates a record. Validation failures keep their field messages.
    pub async fn create(&self, payload: &R::Create) -> Outcome<R::Entity> {
        settle(R::NAME, "create", self.repository.create(payload).await)
    }

    /// Applies a partial update.
    pub async fn update(&self, id: RecordId, patch: &R::Update) -> Outcome<R::Entity> {
        settle(R::NAME, "update", self.repository.update(id, patch).await)
    }

    /// Deletes a record.
    pub async fn delete(&self, id: RecordId) -> Outcome<()> {
        settle(R::NAME, "delete", self.repository.delete(id).await)
    }
}

/// Converts a repository result, logging the failure.
fn settle<T>(
    resource: &'static str,
    operation: &'static str,
    result: Result<T, ApiError>,
) -> Outcome<T> {
    if let Err(err) = &result {
        warn!(resource, operation, error = %err, "Manager operation failed");
    }
    Outcome::from_result(result)
}
