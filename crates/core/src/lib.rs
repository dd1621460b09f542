//! Domain types shared by the database and API crates.
//!
//! - [`error`] -- the domain error taxonomy.
//! - [`types`] -- id and timestamp aliases.
//! - [`roles`] -- names of the seeded roles.
//! - [`users`] -- typed, validated user input.

pub mod error;
pub mod roles;
pub mod types;
pub mod users;
