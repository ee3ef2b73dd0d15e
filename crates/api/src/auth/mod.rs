//! Authentication primitives.
//!
//! - [`jwt`] -- validation of bearer tokens issued by the identity service,
//!   plus a generator used by tests and local tooling.

pub mod jwt;
