// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::RecordId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single grantable permission, keyed `"<resource>.<action>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// The permission key, e.g. `incidents.update`.
    pub name: String,
    /// Localized description.
    #[serde(default)]
    pub label: String,
}

impl Permission {
    /// Splits the key into `(resource, action)`.
    ///
    /// Returns `None` for keys without a `.` separator.
    #[must_use]
    pub fn parts(&self) -> Option<(&str, &str)> {
        self.name.split_once('.')
    }
}

/// A role as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Display name, unique per tenant.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Number of users holding the role.
    #[serde(default)]
    pub users_count: u32,
    /// Built-in roles cannot be edited or deleted.
    #[serde(default)]
    pub is_system: bool,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last modification time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Role {
    /// Returns whether the role grants a permission key.
    #[must_use]
    pub fn grants(&self, key: &str) -> bool {
        self.permissions.iter().any(|p| p.name == key)
    }
}

/// Body of `POST /roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePayload {
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifiers of the granted permissions.
    #[serde(default)]
    pub permission_ids: Vec<RecordId>,
}

/// Body of `PUT /roles/{id}`. Only supplied fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePatch {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement permission set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_ids: Option<Vec<RecordId>>,
}

/// A user holding a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUser {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
}
