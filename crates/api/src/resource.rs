// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-resource type bindings for the generic repository and manager.

use crate::capabilities::{ResourceGate, TenantScope};
use maintdesk_domain::{
    DomainError, Incident, IncidentFilters, IncidentPatch, IncidentPayload, ListQuery, Maintenance,
    MaintenanceFilters, MaintenancePatch, MaintenancePayload, QueryFilter, Role, RoleFilters,
    RolePatch, RolePayload,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A REST resource with list/get/create/update/delete endpoints.
pub trait Resource: Send + Sync + 'static {
    /// Singular name used in log fields and error messages.
    const NAME: &'static str;
    /// Collection path, e.g. `/incidents`.
    const PATH: &'static str;
    /// Permission prefix and tenant restriction.
    const GATE: ResourceGate;

    /// The record returned by the server.
    type Entity: DeserializeOwned + Serialize + Clone + Send + Sync + 'static;
    /// The list filter object, narrowed out of a generic [`ListQuery`].
    type Filters: QueryFilter + for<'a> TryFrom<&'a ListQuery, Error = DomainError> + Send + Sync;
    /// The creation payload.
    type Create: Serialize + Send + Sync;
    /// The partial update payload.
    type Update: Serialize + Send + Sync;
}

/// Incidents reported against materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidents;

impl Resource for Incidents {
    const NAME: &'static str = "incident";
    const PATH: &'static str = "/incidents";
    const GATE: ResourceGate = ResourceGate::new("incidents", TenantScope::Any);

    type Entity = Incident;
    type Filters = IncidentFilters;
    type Create = IncidentPayload;
    type Update = IncidentPatch;
}

/// Maintenances carried out on materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maintenances;

impl Resource for Maintenances {
    const NAME: &'static str = "maintenance";
    const PATH: &'static str = "/maintenances";
    const GATE: ResourceGate = ResourceGate::new("maintenances", TenantScope::Any);

    type Entity = Maintenance;
    type Filters = MaintenanceFilters;
    type Create = MaintenancePayload;
    type Update = MaintenancePatch;
}

/// Roles and their permission grants. Managed from headquarters only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles;

impl Resource for Roles {
    const NAME: &'static str = "role";
    const PATH: &'static str = "/roles";
    const GATE: ResourceGate = ResourceGate::new("roles", TenantScope::HeadquartersOnly);

    type Entity = Role;
    type Filters = RoleFilters;
    type Create = RolePayload;
    type Update = RolePatch;
}
