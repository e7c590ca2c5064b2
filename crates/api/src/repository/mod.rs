// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repositories map one logical operation onto exactly one HTTP request.
//!
//! They decode responses into typed records and return errors untouched;
//! translation into display messages happens in the manager layer.

mod incidents;
mod maintenances;
mod roles;

use crate::error::ApiError;
use crate::resource::Resource;
use crate::transport::{ApiRequest, HttpTransport, Method, decode, decode_data};
use maintdesk_domain::{Paginated, QueryFilter, RecordId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// The CRUD endpoints of one resource.
pub struct Repository<R: Resource> {
    transport: Arc<dyn HttpTransport>,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for Repository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("resource", &R::NAME)
            .field("transport", &self.transport)
            .finish()
    }
}

impl<R: Resource> Repository<R> {
    /// Creates a repository over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            resource: PhantomData,
        }
    }

    /// Returns the path of one record.
    #[must_use]
    pub fn record_path(id: RecordId) -> String {
        format!("{}/{id}", R::PATH)
    }

    /// Returns the path of a sub-resource of the collection or of a record.
    fn sub_path(id: Option<RecordId>, segment: &str) -> String {
        id.map_or_else(
            || format!("{}/{segment}", R::PATH),
            |id| format!("{}/{id}/{segment}", R::PATH),
        )
    }

    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        debug!(
            resource = R::NAME,
            method = %request.method,
            path = %request.path,
            "Repository request"
        );
        self.transport.send(request).await
    }

    /// Sends a request and decodes its bare body.
    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        decode(self.send(request).await?)
    }

    /// Sends a request and decodes its `{data: ...}` body.
    async fn fetch_data<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        decode_data(self.send(request).await?)
    }

    /// `GET {PATH}/{segment}` returning a `{data: [...]}` list.
    async fn lookup<T: DeserializeOwned>(
        &self,
        segment: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let request: ApiRequest = ApiRequest::get(Self::sub_path(None, segment)).with_query(query);
        self.fetch_data(request).await
    }

    /// Lists one page of records.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`ApiError::Decode`] if the body is
    /// not a paginated envelope.
    pub async fn list(&self, filters: &R::Filters) -> Result<Paginated<R::Entity>, ApiError> {
        self.fetch(ApiRequest::get(R::PATH).with_query(filters.query_pairs()))
            .await
    }

    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] naming the record when it does not
    /// exist, or any other transport error.
    pub async fn get(&self, id: RecordId) -> Result<R::Entity, ApiError> {
        self.fetch_data(ApiRequest::get(Self::record_path(id)))
            .await
            .map_err(|e| e.for_record(R::NAME, id))
    }

    /// Creates a record and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the server rejects the payload,
    /// or any other transport error.
    pub async fn create(&self, payload: &R::Create) -> Result<R::Entity, ApiError> {
        let body: Value = encode(payload)?;
        self.fetch_data(ApiRequest::new(Method::Post, R::PATH).with_body(body))
            .await
    }

    /// Applies a partial update and returns the record as stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the server rejects the patch,
    /// [`ApiError::NotFound`] when the record does not exist, or any other
    /// transport error.
    pub async fn update(&self, id: RecordId, patch: &R::Update) -> Result<R::Entity, ApiError> {
        let body: Value = encode(patch)?;
        self.fetch_data(ApiRequest::new(Method::Put, Self::record_path(id)).with_body(body))
            .await
            .map_err(|e| e.for_record(R::NAME, id))
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the record does not exist, or any
    /// other transport error.
    pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        self.send(ApiRequest::delete(Self::record_path(id)))
            .await
            .map(|_| ())
            .map_err(|e| e.for_record(R::NAME, id))
    }
}

fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::InvalidRequest {
        message: e.to_string(),
    })
}
