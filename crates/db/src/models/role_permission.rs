//! Role-permission association model.

use serde::Serialize;
use sqlx::FromRow;
use tindahero_core::types::DbId;

use super::permission::Permission;
use super::role::Role;

/// Flat row produced by joining `role_permission` with `role` and `permission`.
#[derive(Debug, Clone, FromRow)]
pub struct RolePermissionRow {
    pub id: DbId,
    pub role_id: DbId,
    pub role_name: String,
    pub role_description: Option<String>,
    pub permission_id: DbId,
    pub permission_name: String,
}

/// A role-permission link with both referenced rows expanded.
#[derive(Debug, Clone, Serialize)]
pub struct RolePermissionExpanded {
    pub id: DbId,
    pub role_id: DbId,
    pub permission_id: DbId,
    pub role: Role,
    pub permission: Permission,
}

impl From<RolePermissionRow> for RolePermissionExpanded {
    fn from(row: RolePermissionRow) -> Self {
        Self {
            id: row.id,
            role_id: row.role_id,
            permission_id: row.permission_id,
            role: Role {
                id: row.role_id,
                name: row.role_name,
                description: row.role_description,
            },
            permission: Permission {
                id: row.permission_id,
                name: row.permission_name,
            },
        }
    }
}
