//! Handlers for the `/role_permission` resource.

use axum::extract::State;
use axum::Json;
use tindahero_db::models::role_permission::RolePermissionExpanded;
use tindahero_db::repositories::RolePermissionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /role_permission/
///
/// Every link is returned with its role and permission embedded.
pub async fn list_role_permissions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RolePermissionExpanded>>> {
    let links = RolePermissionRepo::list_expanded(&state.pool).await?;
    Ok(Json(links))
}
