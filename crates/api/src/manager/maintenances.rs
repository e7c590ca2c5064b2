// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Manager, settle};
use crate::error::ApiError;
use crate::outcome::Outcome;
use crate::resource::Maintenances;
use maintdesk_domain::{
    Incident, ItemMovement, MaintenanceStatus, MaintenanceType, PageSearch, Paginated,
    Realization, RecordId, SelectOption, StockItem, Summary,
};
use serde::Serialize;

/// Everything the maintenance form needs before it can render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceFormOptions {
    /// Materials a maintenance may be planned on.
    pub materials: Vec<Summary>,
    /// Operators for internal maintenances.
    pub operators: Vec<Summary>,
    /// Contractors for external maintenances.
    pub companies: Vec<Summary>,
    /// Localized status labels.
    pub statuses: Vec<SelectOption<MaintenanceStatus>>,
    /// Localized type labels.
    pub types: Vec<SelectOption<MaintenanceType>>,
    /// Localized realization labels.
    pub realizations: Vec<SelectOption<Realization>>,
}

type MaintenanceLookups = (
    Result<Vec<Summary>, ApiError>,
    Result<Vec<Summary>, ApiError>,
    Result<Vec<Summary>, ApiError>,
    Result<Vec<SelectOption<MaintenanceStatus>>, ApiError>,
    Result<Vec<SelectOption<MaintenanceType>>, ApiError>,
    Result<Vec<SelectOption<Realization>>, ApiError>,
);

impl MaintenanceFormOptions {
    fn from_lookups(lookups: MaintenanceLookups) -> Result<Self, ApiError> {
        let (materials, operators, companies, statuses, types, realizations) = lookups;
        Ok(Self {
            materials: materials?,
            operators: operators?,
            companies: companies?,
            statuses: statuses?,
            types: types?,
            realizations: realizations?,
        })
    }
}

impl Manager<Maintenances> {
    /// Incidents attached to a maintenance.
    pub async fn incidents(&self, id: RecordId) -> Outcome<Vec<Incident>> {
        settle("maintenance", "incidents", self.repository.incidents(id).await)
    }

    /// Stock movements booked against a maintenance.
    pub async fn item_movements(
        &self,
        id: RecordId,
        query: &PageSearch,
    ) -> Outcome<Paginated<ItemMovement>> {
        settle(
            "maintenance",
            "item_movements",
            self.repository.item_movements(id, query).await,
        )
    }

    /// Materials a maintenance may be planned on.
    pub async fn available_materials(&self) -> Outcome<Vec<Summary>> {
        settle(
            "maintenance",
            "available_materials",
            self.repository.available_materials().await,
        )
    }

    /// Users who may operate an internal maintenance.
    pub async fn available_operators(&self) -> Outcome<Vec<Summary>> {
        settle(
            "maintenance",
            "available_operators",
            self.repository.available_operators().await,
        )
    }

    /// Contractors who may carry out an external maintenance.
    pub async fn available_companies(&self) -> Outcome<Vec<Summary>> {
        settle(
            "maintenance",
            "available_companies",
            self.repository.available_companies().await,
        )
    }

    /// Stock items that may be consumed.
    pub async fn available_items(&self) -> Outcome<Vec<StockItem>> {
        settle(
            "maintenance",
            "available_items",
            self.repository.available_items().await,
        )
    }

    /// Localized status labels.
    pub async fn status_options(&self) -> Outcome<Vec<SelectOption<MaintenanceStatus>>> {
        settle(
            "maintenance",
            "status_options",
            self.repository.status_options().await,
        )
    }

    /// Localized type labels.
    pub async fn type_options(&self) -> Outcome<Vec<SelectOption<MaintenanceType>>> {
        settle(
            "maintenance",
            "type_options",
            self.repository.type_options().await,
        )
    }

    /// Localized realization labels.
    pub async fn realization_options(&self) -> Outcome<Vec<SelectOption<Realization>>> {
        settle(
            "maintenance",
            "realization_options",
            self.repository.realization_options().await,
        )
    }

    /// Loads every maintenance form lookup concurrently.
    ///
    /// Waits for all six lookups to finish. Fails with the first failure in
    /// declaration order when any of them fails.
    pub async fn maintenance_form_options(&self) -> Outcome<MaintenanceFormOptions> {
        let lookups = futures::join!(
            self.repository.available_materials(),
            self.repository.available_operators(),
            self.repository.available_companies(),
            self.repository.status_options(),
            self.repository.type_options(),
            self.repository.realization_options(),
        );
        settle(
            "maintenance",
            "form_options",
            MaintenanceFormOptions::from_lookups(lookups),
        )
    }
}
