//! Repository for the `role_permission` association table.

use sqlx::PgPool;

use crate::models::role_permission::{RolePermissionExpanded, RolePermissionRow};

/// Joined select producing a [`RolePermissionRow`]. Every link references an
/// existing role and permission, so inner joins drop nothing.
const EXPANDED_SELECT: &str = "SELECT rp.id, rp.role_id, r.name AS role_name, \
                                      r.description AS role_description, \
                                      rp.permission_id, p.name AS permission_name \
                               FROM role_permission rp \
                               JOIN role r ON r.id = rp.role_id \
                               JOIN permission p ON p.id = rp.permission_id";

/// Provides read operations for role-permission links.
pub struct RolePermissionRepo;

impl RolePermissionRepo {
    /// List every link with its role and permission expanded, ordered by
    /// role name, permission name, then link ID.
    pub async fn list_expanded(pool: &PgPool) -> Result<Vec<RolePermissionExpanded>, sqlx::Error> {
        let query = format!("{EXPANDED_SELECT} ORDER BY r.name ASC, p.name ASC, rp.id ASC");
        let rows = sqlx::query_as::<_, RolePermissionRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(RolePermissionExpanded::from).collect())
    }
}
