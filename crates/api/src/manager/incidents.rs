// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Manager, settle};
use crate::error::ApiError;
use crate::outcome::Outcome;
use crate::resource::Incidents;
use maintdesk_domain::{
    AvailableMaintenancesQuery, IncidentSeverity, IncidentStatus, SelectOption, Summary,
};
use serde::Serialize;

/// Everything the incident form needs before it can render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentFormOptions {
    /// Materials an incident may be reported against.
    pub materials: Vec<Summary>,
    /// Localized severity labels.
    pub severities: Vec<SelectOption<IncidentSeverity>>,
    /// Localized status labels.
    pub statuses: Vec<SelectOption<IncidentStatus>>,
}

type IncidentLookups = (
    Result<Vec<Summary>, ApiError>,
    Result<Vec<SelectOption<IncidentSeverity>>, ApiError>,
    Result<Vec<SelectOption<IncidentStatus>>, ApiError>,
);

impl IncidentFormOptions {
    fn from_lookups((materials, severities, statuses): IncidentLookups) -> Result<Self, ApiError> {
        Ok(Self {
            materials: materials?,
            severities: severities?,
            statuses: statuses?,
        })
    }
}

impl Manager<Incidents> {
    /// Materials an incident may be reported against.
    pub async fn available_materials(&self) -> Outcome<Vec<Summary>> {
        settle(
            "incident",
            "available_materials",
            self.repository.available_materials().await,
        )
    }

    /// Maintenances an incident may be attached to.
    pub async fn available_maintenances(
        &self,
        query: &AvailableMaintenancesQuery,
    ) -> Outcome<Vec<Summary>> {
        settle(
            "incident",
            "available_maintenances",
            self.repository.available_maintenances(query).await,
        )
    }

    /// Localized severity labels.
    pub async fn severity_options(&self) -> Outcome<Vec<SelectOption<IncidentSeverity>>> {
        settle(
            "incident",
            "severity_options",
            self.repository.severity_options().await,
        )
    }

    /// Localized status labels.
    pub async fn status_options(&self) -> Outcome<Vec<SelectOption<IncidentStatus>>> {
        settle(
            "incident",
            "status_options",
            self.repository.status_options().await,
        )
    }

    /// Loads every incident form lookup concurrently.
    ///
    /// Waits for all lookups to finish. Fails with the first failure in
    /// declaration order when any of them fails.
    pub async fn incident_form_options(&self) -> Outcome<IncidentFormOptions> {
        let lookups = futures::join!(
            self.repository.available_materials(),
            self.repository.severity_options(),
            self.repository.status_options(),
        );
        settle(
            "incident",
            "form_options",
            IncidentFormOptions::from_lookups(lookups),
        )
    }
}
