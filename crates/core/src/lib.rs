//! Domain vocabulary for the commute recurring-ride service.
//!
//! Pure logic only: no database or HTTP types live here, so both the
//! repository layer and the API layer can depend on it.

pub mod error;
pub mod recurring_ride;
pub mod types;
