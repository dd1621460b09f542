//! Route definitions for the `/role_permission` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::role_permissions;
use crate::state::AppState;

/// ```text
/// GET    /role_permission/        -> list_role_permissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/role_permission",
            get(role_permissions::list_role_permissions),
        )
        .route(
            "/role_permission/",
            get(role_permissions::list_role_permissions),
        )
}
