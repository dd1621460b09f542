//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000002_seed_roles_and_permissions.sql`.

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";
