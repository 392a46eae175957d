//! Development tooling for the Agarthan services.
//!
//! * `push-reports` fills the report service with synthetic reports.
//! * `seed-users` / `seed-users-lite` upsert fixed reference data and accounts
//!   straight into the database.

pub mod auth;
pub mod db;
pub mod error;
pub mod logging;
pub mod reports;
pub mod seed;
pub mod validation;

pub use error::{AppError, EXIT_FAILURE, EXIT_OK, EXIT_USAGE};
