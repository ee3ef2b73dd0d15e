//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the driver a ride mutation acts for.

pub mod auth;
