//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus the DTOs used to write it where the API writes that table.

pub mod permission;
pub mod role;
pub mod role_permission;
pub mod user;
