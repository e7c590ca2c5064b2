// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Maintenance records, their taxonomies and stock movements.

use crate::error::DomainError;
use crate::types::{RecordId, Summary};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Where a maintenance is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    /// Scheduled, not started.
    Planned,
    /// Work underway.
    InProgress,
    /// Work finished.
    Completed,
    /// Abandoned.
    Cancelled,
}

impl MaintenanceStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Planned,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether the maintenance can no longer change state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus {
                resource: "maintenance",
                value: s.to_string(),
            })
    }
}

/// Why the maintenance happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    /// Scheduled upkeep.
    Preventive,
    /// Repair following an incident.
    Corrective,
}

impl MaintenanceType {
    /// Every type.
    pub const ALL: [Self; 2] = [Self::Preventive, Self::Corrective];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preventive => "preventive",
            Self::Corrective => "corrective",
        }
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownMaintenanceType(s.to_string()))
    }
}

/// Who carries out the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Realization {
    /// An in-house operator.
    Internal,
    /// A contracted company.
    External,
}

impl Realization {
    /// Every realization.
    pub const ALL: [Self; 2] = [Self::Internal, Self::External];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

impl std::fmt::Display for Realization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Realization {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|realization| realization.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRealization(s.to_string()))
    }
}

/// A maintenance as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Short headline.
    pub title: String,
    /// Free-form details.
    #[serde(default)]
    pub description: Option<String>,
    /// Machine type value.
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    /// Localized type label.
    #[serde(default)]
    pub type_label: String,
    /// Machine realization value.
    pub realization: Realization,
    /// Localized realization label.
    #[serde(default)]
    pub realization_label: String,
    /// Machine status value.
    pub status: MaintenanceStatus,
    /// Localized status label.
    #[serde(default)]
    pub status_label: String,
    /// The material being maintained.
    #[serde(default)]
    pub material: Option<Summary>,
    /// The site the material belongs to.
    #[serde(default)]
    pub site: Option<Summary>,
    /// The operator, for internal work.
    #[serde(default)]
    pub operator: Option<Summary>,
    /// The company, for external work.
    #[serde(default)]
    pub company: Option<Summary>,
    /// Number of linked incidents.
    #[serde(default)]
    pub incidents_count: u32,
    /// Planned start.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub scheduled_at: Option<OffsetDateTime>,
    /// Actual completion.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last modification time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Body of `POST /maintenances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenancePayload {
    /// Short headline.
    pub title: String,
    /// Free-form details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The material being maintained.
    pub material_id: RecordId,
    /// Why the maintenance happens.
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    /// Who carries out the work.
    pub realization: Realization,
    /// Initial status; the server defaults to `planned`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
    /// Required for internal work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<RecordId>,
    /// Required for external work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<RecordId>,
    /// Planned start.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub scheduled_at: Option<OffsetDateTime>,
    /// Incidents addressed by this maintenance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incident_ids: Vec<RecordId>,
}

/// Body of `PUT /maintenances/{id}`. Only supplied fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenancePatch {
    /// New headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub maintenance_type: Option<MaintenanceType>,
    /// New realization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realization: Option<Realization>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
    /// New operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<RecordId>,
    /// New company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<RecordId>,
    /// New planned start.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub scheduled_at: Option<OffsetDateTime>,
    /// Replacement set of linked incidents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_ids: Option<Vec<RecordId>>,
}

/// A stock item consumed by a maintenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMovement {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// The consumed item.
    pub item: Summary,
    /// Units taken out of stock.
    pub quantity: i64,
    /// Cost of one unit at the time of the movement.
    pub unit_cost: f64,
    /// `quantity * unit_cost`, as computed by the server.
    pub total_cost: f64,
    /// Optional operator note.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the stock left.
    #[serde(with = "time::serde::rfc3339")]
    pub moved_at: OffsetDateTime,
}

/// A stock item that can be attached to a maintenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Supplier or catalogue reference.
    #[serde(default)]
    pub reference: Option<String>,
    /// Units currently in stock.
    pub stock: i64,
    /// Current unit cost.
    pub unit_cost: f64,
}
