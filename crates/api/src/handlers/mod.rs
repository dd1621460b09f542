//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `tindahero_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod permissions;
pub mod role_permissions;
pub mod roles;
pub mod users;
