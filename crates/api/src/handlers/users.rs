//! Handlers for the `/users` resource.
//!
//! Create and update take the full `{name, email, password, role}` payload;
//! update replaces every field and always re-hashes the password. Read
//! responses never include the password digest.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tindahero_core::error::CoreError;
use tindahero_core::types::{DbId, Timestamp};
use tindahero_core::users::UserInput;
use tindahero_db::models::user::{CreateUser, ReplaceUser, UserResponse};
use tindahero_db::repositories::{RoleRepo, UserRepo};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `POST /users/`.
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Response body for `PUT /users/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdatedUserResponse {
    pub id: DbId,
    pub name: String,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /users/
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user.into()))
}

/// POST /users/
///
/// Validate the payload, confirm the role exists, hash the password and
/// insert the user. Returns 201 with `{id, name, created_at}`.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(input): AppJson<UserInput>,
) -> AppResult<(StatusCode, Json<CreatedUserResponse>)> {
    let input = input.into_valid()?;
    ensure_role_exists(&state, input.role_id).await?;

    let password_digest = digest_password(&state, input.password).await?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_digest,
            role_id: input.role_id,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, role_id = %input.role_id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            id: user.id,
            name: user.name,
            created_at: user.created_at,
        }),
    ))
}

/// PUT /users/{id}
///
/// Full replace. An unknown id is reported before the body is looked at,
/// so a malformed or mistyped body still yields 404 for a missing user.
/// `created_at` is preserved; `updated_at` is bumped.
pub async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: Result<AppJson<UserInput>, AppError>,
) -> AppResult<Json<UpdatedUserResponse>> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let AppJson(input) = body?;
    let input = input.into_valid()?;
    ensure_role_exists(&state, input.role_id).await?;

    let password_digest = digest_password(&state, input.password).await?;

    // The row may have been deleted since the lookup above.
    let user = UserRepo::replace(
        &state.pool,
        id,
        &ReplaceUser {
            name: input.name,
            email: input.email,
            password_digest,
            role_id: input.role_id,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = %user.id, role_id = %input.role_id, "User updated");

    Ok(Json(UpdatedUserResponse {
        id: user.id,
        name: user.name,
        updated_at: user.updated_at,
    }))
}

/// DELETE /users/{id}
///
/// Permanently remove a user. Returns 204 No Content.
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(user_id = %id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject a payload whose role does not exist before it reaches the
/// foreign key.
async fn ensure_role_exists(state: &AppState, role_id: DbId) -> AppResult<()> {
    if RoleRepo::exists(&state.pool, role_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Integrity(format!(
            "Role with id {role_id} does not exist"
        ))))
    }
}

/// Hash on the blocking pool so Argon2 does not stall the async workers.
async fn digest_password(state: &AppState, password: String) -> AppResult<String> {
    let config = state.config.password;
    tokio::task::spawn_blocking(move || hash_password(&password, &config))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}
