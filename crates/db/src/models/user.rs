//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tindahero_core::types::{DbId, Timestamp};

/// Full user row from the `user` table.
///
/// Contains the password digest -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub role_id: Option<DbId>,
    pub permission_id: Option<DbId>,
}

/// Safe user representation for API responses (no password digest).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role_id: Option<DbId>,
    pub permission_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role_id: user.role_id,
            permission_id: user.permission_id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for inserting a new user. The digest must already be computed.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub role_id: DbId,
}

/// DTO for a full-replace update. Every column is overwritten.
#[derive(Debug)]
pub struct ReplaceUser {
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub role_id: DbId,
}
