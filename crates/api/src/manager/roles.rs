// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Manager, settle};
use crate::outcome::Outcome;
use crate::resource::Roles;
use maintdesk_domain::{PageSearch, Paginated, Permission, PermissionSearch, RecordId, RoleUser};

impl Manager<Roles> {
    /// Permissions that may be granted to a role.
    pub async fn available_permissions(&self, query: &PermissionSearch) -> Outcome<Vec<Permission>> {
        settle(
            "role",
            "available_permissions",
            self.repository.available_permissions(query).await,
        )
    }

    /// Users holding a role.
    pub async fn users(&self, id: RecordId, query: &PageSearch) -> Outcome<Paginated<RoleUser>> {
        settle("role", "users", self.repository.users(id, query).await)
    }
}
