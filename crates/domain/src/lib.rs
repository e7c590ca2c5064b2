// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod filters;
mod incident;
mod maintenance;
mod pagination;
mod query;
mod role;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use filters::{
    AvailableMaintenancesQuery, IncidentFilters, MATERIAL_ID, MaintenanceFilters, PageSearch,
    PermissionSearch, REALIZATION, RoleFilters, SEVERITY, STATUS, TYPE,
};
pub use incident::{Incident, IncidentPatch, IncidentPayload, IncidentSeverity, IncidentStatus};
pub use maintenance::{
    ItemMovement, Maintenance, MaintenancePatch, MaintenancePayload, MaintenanceStatus,
    MaintenanceType, Realization, StockItem,
};
pub use pagination::{PageMeta, Paginated};
pub use query::{FilterValue, ListQuery, QueryFilter, SortDirection};
pub use role::{Permission, Role, RolePatch, RolePayload, RoleUser};
pub use types::{RecordId, SelectOption, Summary, ValidationErrors};
pub use validation::{
    MAX_TITLE_LENGTH, validate_incident_payload, validate_maintenance_payload,
    validate_role_payload,
};
