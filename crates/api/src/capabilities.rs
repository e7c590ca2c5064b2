// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for permission-aware UI gating.
//!
//! Capabilities tell a screen which actions to offer for a resource. They
//! are advisory only and do not replace server-side authorization.

use maintdesk_domain::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only view of the signed-in user's permissions and tenant.
pub trait PermissionSource {
    /// Returns whether the user holds a `"<resource>.<action>"` permission.
    fn has_permission(&self, key: &str) -> bool;

    /// Returns whether the current tenant is the headquarters tenant.
    fn is_headquarters(&self) -> bool;
}

/// A fixed set of granted permission keys plus the tenant flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    keys: HashSet<String>,
    headquarters: bool,
}

impl PermissionSet {
    /// Creates a permission set.
    ///
    /// # Arguments
    ///
    /// * `keys` - The granted permission keys
    /// * `headquarters` - Whether the tenant is the headquarters tenant
    #[must_use]
    pub fn new<I, K>(keys: I, headquarters: bool) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            headquarters,
        }
    }

    /// Creates a permission set from the permissions a role grants.
    #[must_use]
    pub fn from_role(role: &Role, headquarters: bool) -> Self {
        Self::new(role.permissions.iter().map(|p| p.name.clone()), headquarters)
    }
}

impl PermissionSource for PermissionSet {
    fn has_permission(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    fn is_headquarters(&self) -> bool {
        self.headquarters
    }
}

/// Which tenants a resource is available to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantScope {
    /// Every tenant.
    Any,
    /// Only the headquarters tenant.
    HeadquartersOnly,
    /// Only site tenants.
    SiteOnly,
}

impl TenantScope {
    /// Returns whether a tenant satisfies this scope.
    #[must_use]
    pub const fn admits(self, is_headquarters: bool) -> bool {
        match self {
            Self::Any => true,
            Self::HeadquartersOnly => is_headquarters,
            Self::SiteOnly => !is_headquarters,
        }
    }
}

/// The gated actions on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// List and show.
    View,
    /// Create.
    Create,
    /// Update.
    Update,
    /// Delete.
    Delete,
}

impl Action {
    /// Returns the action segment of a permission key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Builds a `"<resource>.<action>"` permission key.
#[must_use]
pub fn permission_key(resource: &str, action: Action) -> String {
    format!("{resource}.{}", action.as_str())
}

/// A resource's permission prefix and tenant restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceGate {
    /// The permission prefix, e.g. `incidents`.
    pub resource: &'static str,
    /// Which tenants may use the resource at all.
    pub scope: TenantScope,
}

impl ResourceGate {
    /// Creates a gate.
    #[must_use]
    pub const fn new(resource: &'static str, scope: TenantScope) -> Self {
        Self { resource, scope }
    }
}

/// Whether an action is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// The action may be offered.
    Allowed,
    /// The action must be hidden or disabled.
    Denied,
}

impl Capability {
    /// Converts a boolean check into a capability.
    #[must_use]
    pub const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }

    /// Returns whether the action is permitted.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// The actions a user may take on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceCapabilities {
    /// List and show.
    pub can_view: Capability,
    /// Create.
    pub can_create: Capability,
    /// Update.
    pub can_update: Capability,
    /// Delete.
    pub can_delete: Capability,
}

impl ResourceCapabilities {
    /// Every action denied.
    pub const DENIED: Self = Self {
        can_view: Capability::Denied,
        can_create: Capability::Denied,
        can_update: Capability::Denied,
        can_delete: Capability::Denied,
    };

    /// Returns whether a row would show any action (update or delete).
    #[must_use]
    pub const fn has_any_action(&self) -> bool {
        self.can_update.is_allowed() || self.can_delete.is_allowed()
    }
}

/// Computes the capabilities of a user on a resource.
///
/// Fails closed: when the tenant does not satisfy the gate's scope every
/// capability is denied, whatever permissions the user holds.
///
/// # Arguments
///
/// * `source` - The user's permissions and tenant
/// * `gate` - The resource's permission prefix and scope
#[must_use]
pub fn compute_capabilities<P: PermissionSource + ?Sized>(
    source: &P,
    gate: &ResourceGate,
) -> ResourceCapabilities {
    if !gate.scope.admits(source.is_headquarters()) {
        return ResourceCapabilities::DENIED;
    }

    let check = |action: Action| -> Capability {
        Capability::from_bool(source.has_permission(&permission_key(gate.resource, action)))
    };

    ResourceCapabilities {
        can_view: check(Action::View),
        can_create: check(Action::Create),
        can_update: check(Action::Update),
        can_delete: check(Action::Delete),
    }
}
