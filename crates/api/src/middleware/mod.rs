//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the account behind a JWT Bearer token.
//! - [`rbac::RequireStaff`] -- requires the `staff` role.

pub mod auth;
pub mod rbac;
