//! Repository for the `user` table.
//!
//! `user` is a reserved word in PostgreSQL, so the table name is always quoted.

use sqlx::PgPool;
use tindahero_core::types::{new_id, DbId};

use crate::models::user::{CreateUser, ReplaceUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, password_digest, created_at, updated_at, role_id, permission_id";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a freshly generated ID, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO \"user\" (id, name, email, password_digest, role_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_digest)
            .bind(input.role_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM \"user\" WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM \"user\" ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Overwrite every writable column of a user and bump `updated_at`.
    ///
    /// `created_at` is left untouched. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ReplaceUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE \"user\" SET
                name = $2,
                email = $3,
                password_digest = $4,
                role_id = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_digest)
            .bind(input.role_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a user.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM \"user\" WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all users.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM \"user\"")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
