// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::Repository;
use crate::error::ApiError;
use crate::resource::Maintenances;
use crate::transport::ApiRequest;
use maintdesk_domain::{
    Incident, ItemMovement, MaintenanceStatus, MaintenanceType, PageSearch, Paginated,
    QueryFilter, Realization, RecordId, SelectOption, StockItem, Summary,
};

impl Repository<Maintenances> {
    /// Incidents attached to a maintenance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the maintenance does not exist,
    /// or any other transport error.
    pub async fn incidents(&self, id: RecordId) -> Result<Vec<Incident>, ApiError> {
        self.fetch_data(ApiRequest::get(Self::sub_path(Some(id), "incidents")))
            .await
            .map_err(|e| e.for_record("maintenance", id))
    }

    /// Stock movements booked against a maintenance. The page metadata
    /// carries a `total_cost` aggregate over every movement.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the maintenance does not exist,
    /// or any other transport error.
    pub async fn item_movements(
        &self,
        id: RecordId,
        query: &PageSearch,
    ) -> Result<Paginated<ItemMovement>, ApiError> {
        let request: ApiRequest = ApiRequest::get(Self::sub_path(Some(id), "item-movements"))
            .with_query(query.query_pairs());
        self.fetch(request)
            .await
            .map_err(|e| e.for_record("maintenance", id))
    }

    /// Materials a maintenance may be planned on.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn available_materials(&self) -> Result<Vec<Summary>, ApiError> {
        self.lookup("available-materials", Vec::new()).await
    }

    /// Users who may operate an internal maintenance.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn available_operators(&self) -> Result<Vec<Summary>, ApiError> {
        self.lookup("available-operators", Vec::new()).await
    }

    /// Contractors who may carry out an external maintenance.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn available_companies(&self) -> Result<Vec<Summary>, ApiError> {
        self.lookup("available-companies", Vec::new()).await
    }

    /// Stock items that may be consumed.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn available_items(&self) -> Result<Vec<StockItem>, ApiError> {
        self.lookup("available-items", Vec::new()).await
    }

    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn status_options(&self) -> Result<Vec<SelectOption<MaintenanceStatus>>, ApiError> {
        self.lookup("status-options", Vec::new()).await
    }

    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn type_options(&self) -> Result<Vec<SelectOption<MaintenanceType>>, ApiError> {
        self.lookup("type-options", Vec::new()).await
    }

    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn realization_options(&self) -> Result<Vec<SelectOption<Realization>>, ApiError> {
        self.lookup("realization-options", Vec::new()).await
    }
}
