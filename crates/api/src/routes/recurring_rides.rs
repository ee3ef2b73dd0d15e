//! Route definitions for the recurring ride registry.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::recurring_rides;
use crate::state::AppState;

/// Recurring ride routes mounted at `/recurring-rides`.
///
/// Static segments win over `{id}` in the matcher, so the option and
/// listing paths never reach the id handlers.
///
/// ```text
/// GET    /                          -> list_recurring_rides
/// POST   /                          -> create_recurring_ride
/// GET    /my-recurring-rides        -> list_my_recurring_rides
/// GET    /days/{day_of_week}        -> list_recurring_rides_by_day
/// GET    /options/days-of-week      -> day_of_week_options
/// GET    /options/schedule-types    -> schedule_type_options
/// GET    /{id}                      -> get_recurring_ride
/// PUT    /{id}                      -> update_recurring_ride
/// DELETE /{id}                      -> delete_recurring_ride
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", collection())
        .route(
            "/my-recurring-rides",
            get(recurring_rides::list_my_recurring_rides),
        )
        .route(
            "/days/{day_of_week}",
            get(recurring_rides::list_recurring_rides_by_day),
        )
        .route(
            "/options/days-of-week",
            get(recurring_rides::day_of_week_options),
        )
        .route(
            "/options/schedule-types",
            get(recurring_rides::schedule_type_options),
        )
        .route(
            "/{id}",
            get(recurring_rides::get_recurring_ride)
                .put(recurring_rides::update_recurring_ride)
                .delete(recurring_rides::delete_recurring_ride),
        )
}

/// List and create, shared by `/recurring-rides` and `/recurring-rides/`.
///
/// A nested `"/"` only matches the prefix without a trailing slash, so
/// [`super::api_routes`] registers the slashed form explicitly.
pub fn collection() -> MethodRouter<AppState> {
    get(recurring_rides::list_recurring_rides).post(recurring_rides::create_recurring_ride)
}
