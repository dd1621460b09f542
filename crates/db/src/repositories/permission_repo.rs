//! Repository for the `permission` table.

use sqlx::PgPool;

use crate::models::permission::Permission;

const COLUMNS: &str = "id, name";

/// Provides read operations for permissions.
pub struct PermissionRepo;

impl PermissionRepo {
    /// List all permissions ordered by name, then ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Permission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM permission ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Permission>(&query)
            .fetch_all(pool)
            .await
    }
}
