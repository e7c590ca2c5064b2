// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Incident records and their taxonomies.

use crate::error::DomainError;
use crate::types::{RecordId, Summary};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Where an incident is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    /// Reported, nobody working on it yet.
    Open,
    /// A maintenance is addressing it.
    InProgress,
    /// Fixed, awaiting confirmation.
    Resolved,
    /// Confirmed and archived.
    Closed,
}

impl IncidentStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus {
                resource: "incident",
                value: s.to_string(),
            })
    }
}

/// How badly an incident affects operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentSeverity {
    /// Cosmetic or deferrable.
    Low,
    /// Degraded but usable.
    Medium,
    /// Unusable, workaround exists.
    High,
    /// Unusable and blocking.
    Critical,
}

impl IncidentSeverity {
    /// Every severity, least severe first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for IncidentSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentSeverity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSeverity(s.to_string()))
    }
}

/// An incident as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Short headline.
    pub title: String,
    /// Free-form details.
    #[serde(default)]
    pub description: Option<String>,
    /// Machine status value.
    pub status: IncidentStatus,
    /// Localized status label.
    #[serde(default)]
    pub status_label: String,
    /// Machine severity value.
    pub severity: IncidentSeverity,
    /// Localized severity label.
    #[serde(default)]
    pub severity_label: String,
    /// The affected material.
    #[serde(default)]
    pub material: Option<Summary>,
    /// The site the material belongs to.
    #[serde(default)]
    pub site: Option<Summary>,
    /// Who reported the incident.
    #[serde(default)]
    pub reporter: Option<Summary>,
    /// The maintenance handling the incident, once linked.
    #[serde(default)]
    pub maintenance: Option<Summary>,
    /// When the incident was resolved.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub resolved_at: Option<OffsetDateTime>,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last modification time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Body of `POST /incidents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentPayload {
    /// Short headline.
    pub title: String,
    /// Free-form details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The affected material.
    pub material_id: RecordId,
    /// Initial severity.
    pub severity: IncidentSeverity,
    /// Initial status; the server defaults to `open`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,
    /// An existing maintenance to attach the incident to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_id: Option<RecordId>,
}

/// Body of `PUT /incidents/{id}`. Only supplied fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentPatch {
    /// New headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<RecordId>,
    /// New severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<IncidentSeverity>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,
    /// New maintenance link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_id: Option<RecordId>,
}

impl IncidentPatch {
    /// Returns true when the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.material_id.is_none()
            && self.severity.is_none()
            && self.status.is_none()
            && self.maintenance_id.is_none()
    }
}
