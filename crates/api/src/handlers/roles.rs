//! Handlers for the `/roles` resource.

use axum::extract::State;
use axum::Json;
use tindahero_db::models::role::Role;
use tindahero_db::repositories::RoleRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /roles/
pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(roles))
}
