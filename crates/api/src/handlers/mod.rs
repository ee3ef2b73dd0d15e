//! HTTP handlers, one module per resource.

pub mod recurring_rides;
