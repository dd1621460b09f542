//! Route definitions for the `/permissions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::permissions;
use crate::state::AppState;

/// ```text
/// GET    /permissions/            -> list_permissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/permissions", get(permissions::list_permissions))
        .route("/permissions/", get(permissions::list_permissions))
}
