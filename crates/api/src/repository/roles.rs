// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::Repository;
use crate::error::ApiError;
use crate::resource::Roles;
use crate::transport::ApiRequest;
use maintdesk_domain::{
    PageSearch, Paginated, Permission, PermissionSearch, QueryFilter, RecordId, RoleUser,
};

impl Repository<Roles> {
    /// Permissions that may be granted to a role.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn available_permissions(
        &self,
        query: &PermissionSearch,
    ) -> Result<Vec<Permission>, ApiError> {
        self.lookup("available-permissions", query.query_pairs())
            .await
    }

    /// Users holding a role, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the role does not exist, or any
    /// other transport error.
    pub async fn users(
        &self,
        id: RecordId,
        query: &PageSearch,
    ) -> Result<Paginated<RoleUser>, ApiError> {
        let request: ApiRequest =
            ApiRequest::get(Self::sub_path(Some(id), "users")).with_query(query.query_pairs());
        self.fetch(request)
            .await
            .map_err(|e| e.for_record("role", id))
    }
}
