//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the public recurring-ride listing
/// (`?limit=&day_of_week=`).
///
/// `limit` is resolved with `clamp_list_limit`; `day_of_week` is validated
/// against `0..=6` before it reaches the repository.
#[derive(Debug, Default, Deserialize)]
pub struct ListRecurringRidesParams {
    pub limit: Option<i64>,
    pub day_of_week: Option<i16>,
}
