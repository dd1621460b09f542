pub mod health;
pub mod permissions;
pub mod role_permissions;
pub mod roles;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /roles/                                          list
/// /permissions/                                    list
/// /role_permission/                                list (role and permission expanded)
/// /users/                                          list, create
/// /users/{id}                                      get, replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(roles::router())
        .merge(permissions::router())
        .merge(role_permissions::router())
        .merge(users::router())
}
