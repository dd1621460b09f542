//! Handlers for the `/permissions` resource.

use axum::extract::State;
use axum::Json;
use tindahero_db::models::permission::Permission;
use tindahero_db::repositories::PermissionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /permissions/
pub async fn list_permissions(State(state): State<AppState>) -> AppResult<Json<Vec<Permission>>> {
    let permissions = PermissionRepo::list(&state.pool).await?;
    Ok(Json(permissions))
}
