// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::Repository;
use crate::error::ApiError;
use crate::resource::Incidents;
use maintdesk_domain::{
    AvailableMaintenancesQuery, IncidentSeverity, IncidentStatus, QueryFilter, SelectOption,
    Summary,
};

impl Repository<Incidents> {
    /// Materials an incident may be reported against.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn available_materials(&self) -> Result<Vec<Summary>, ApiError> {
        self.lookup("available-materials", Vec::new()).await
    }

    /// Maintenances an incident may be attached to, optionally narrowed to
    /// one material.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn available_maintenances(
        &self,
        query: &AvailableMaintenancesQuery,
    ) -> Result<Vec<Summary>, ApiError> {
        self.lookup("available-maintenances", query.query_pairs())
            .await
    }

    /// Localized severity labels.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn severity_options(&self) -> Result<Vec<SelectOption<IncidentSeverity>>, ApiError> {
        self.lookup("severity-options", Vec::new()).await
    }

    /// Localized status labels.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn status_options(&self) -> Result<Vec<SelectOption<IncidentStatus>>, ApiError> {
        self.lookup("status-options", Vec::new()).await
    }
}
