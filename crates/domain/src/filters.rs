// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-resource filter objects.
//!
//! Every field is optional and an absent field applies no constraint
//! server-side. List filter objects are narrowed out of a generic
//! [`ListQuery`]; narrowing fails on a filter the resource does not
//! understand or a value it cannot parse.

use crate::error::DomainError;
use crate::incident::{IncidentSeverity, IncidentStatus};
use crate::maintenance::{MaintenanceStatus, MaintenanceType, Realization};
use crate::query::{ListQuery, QueryFilter, QueryPairs, SortDirection};
use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// Name of the material filter parameter.
pub const MATERIAL_ID: &str = "material_id";
/// Name of the status filter parameter.
pub const STATUS: &str = "status";
/// Name of the severity filter parameter.
pub const SEVERITY: &str = "severity";
/// Name of the maintenance type filter parameter.
pub const TYPE: &str = "type";
/// Name of the realization filter parameter.
pub const REALIZATION: &str = "realization";

/// Filters for `GET /incidents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentFilters {
    /// 1-based page.
    pub page: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
    /// Only incidents on this material.
    pub material_id: Option<RecordId>,
    /// Only incidents in this status.
    pub status: Option<IncidentStatus>,
    /// Only incidents of this severity.
    pub severity: Option<IncidentSeverity>,
    /// Sort column.
    pub sort_by: Option<String>,
    /// Sort direction, only sent with `sort_by`.
    pub sort_direction: Option<SortDirection>,
}

impl QueryFilter for IncidentFilters {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: QueryPairs = QueryPairs::default();
        pairs.push("page", self.page);
        pairs.push_text("search", self.search.as_deref());
        pairs.push(MATERIAL_ID, self.material_id);
        pairs.push(STATUS, self.status);
        pairs.push(SEVERITY, self.severity);
        pairs.push_sort(self.sort_by.as_deref(), self.sort_direction);
        pairs.finish()
    }
}

impl TryFrom<&ListQuery> for IncidentFilters {
    type Error = DomainError;

    fn try_from(query: &ListQuery) -> Result<Self, Self::Error> {
        query.ensure_filters("incident", &[MATERIAL_ID, STATUS, SEVERITY])?;
        Ok(Self {
            page: Some(query.page),
            search: query.search.clone(),
            material_id: query.filter_integer(MATERIAL_ID)?,
            status: query.filter_parsed(STATUS)?,
            severity: query.filter_parsed(SEVERITY)?,
            sort_by: query.sort_by.clone(),
            sort_direction: query.effective_sort_direction(),
        })
    }
}

/// Filters for `GET /maintenances`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceFilters {
    /// 1-based page.
    pub page: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
    /// Only maintenances on this material.
    pub material_id: Option<RecordId>,
    /// Only maintenances in this status.
    pub status: Option<MaintenanceStatus>,
    /// Only maintenances of this type.
    pub maintenance_type: Option<MaintenanceType>,
    /// Only maintenances carried out this way.
    pub realization: Option<Realization>,
    /// Sort column.
    pub sort_by: Option<String>,
    /// Sort direction, only sent with `sort_by`.
    pub sort_direction: Option<SortDirection>,
}

impl QueryFilter for MaintenanceFilters {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: QueryPairs = QueryPairs::default();
        pairs.push("page", self.page);
        pairs.push_text("search", self.search.as_deref());
        pairs.push(MATERIAL_ID, self.material_id);
        pairs.push(STATUS, self.status);
        pairs.push(TYPE, self.maintenance_type);
        pairs.push(REALIZATION, self.realization);
        pairs.push_sort(self.sort_by.as_deref(), self.sort_direction);
        pairs.finish()
    }
}

impl TryFrom<&ListQuery> for MaintenanceFilters {
    type Error = DomainError;

    fn try_from(query: &ListQuery) -> Result<Self, Self::Error> {
        query.ensure_filters("maintenance", &[MATERIAL_ID, STATUS, TYPE, REALIZATION])?;
        Ok(Self {
            page: Some(query.page),
            search: query.search.clone(),
            material_id: query.filter_integer(MATERIAL_ID)?,
            status: query.filter_parsed(STATUS)?,
            maintenance_type: query.filter_parsed(TYPE)?,
            realization: query.filter_parsed(REALIZATION)?,
            sort_by: query.sort_by.clone(),
            sort_direction: query.effective_sort_direction(),
        })
    }
}

/// Filters for `GET /roles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFilters {
    /// 1-based page.
    pub page: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
    /// Sort column.
    pub sort_by: Option<String>,
    /// Sort direction, only sent with `sort_by`.
    pub sort_direction: Option<SortDirection>,
}

impl QueryFilter for RoleFilters {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: QueryPairs = QueryPairs::default();
        pairs.push("page", self.page);
        pairs.push_text("search", self.search.as_deref());
        pairs.push_sort(self.sort_by.as_deref(), self.sort_direction);
        pairs.finish()
    }
}

impl TryFrom<&ListQuery> for RoleFilters {
    type Error = DomainError;

    fn try_from(query: &ListQuery) -> Result<Self, Self::Error> {
        query.ensure_filters("role", &[])?;
        Ok(Self {
            page: Some(query.page),
            search: query.search.clone(),
            sort_by: query.sort_by.clone(),
            sort_direction: query.effective_sort_direction(),
        })
    }
}

/// Page and search only, for nested listings such as a role's users or a
/// maintenance's item movements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSearch {
    /// 1-based page.
    pub page: Option<u32>,
    /// Free-text search.
    pub search: Option<String>,
}

impl QueryFilter for PageSearch {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: QueryPairs = QueryPairs::default();
        pairs.push("page", self.page);
        pairs.push_text("search", self.search.as_deref());
        pairs.finish()
    }
}

/// Query for `GET /incidents/available-maintenances`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableMaintenancesQuery {
    /// Only maintenances on this material.
    pub material_id: Option<RecordId>,
}

impl QueryFilter for AvailableMaintenancesQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: QueryPairs = QueryPairs::default();
        pairs.push(MATERIAL_ID, self.material_id);
        pairs.finish()
    }
}

/// Query for `GET /roles/available-permissions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSearch {
    /// Substring of the permission key or label.
    pub search: Option<String>,
    /// Maximum number of permissions returned.
    pub limit: Option<u32>,
}

impl QueryFilter for PermissionSearch {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: QueryPairs = QueryPairs::default();
        pairs.push_text("search", self.search.as_deref());
        pairs.push("limit", self.limit);
        pairs.finish()
    }
}
