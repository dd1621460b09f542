//! Permission entity model.

use serde::Serialize;
use sqlx::FromRow;
use tindahero_core::types::DbId;

/// A permission row from the `permission` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Permission {
    pub id: DbId,
    pub name: String,
}
