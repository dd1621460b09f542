//! Role entity model.

use serde::Serialize;
use sqlx::FromRow;
use tindahero_core::types::DbId;

/// A role row from the `role` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}
