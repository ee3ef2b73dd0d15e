pub mod health;
pub mod recurring_rides;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recurring-rides, /recurring-rides/          list active, create (GET, POST)
/// /recurring-rides/my-recurring-rides           caller's rides (GET, auth)
/// /recurring-rides/days/{day_of_week}           active rides on a weekday (GET)
/// /recurring-rides/options/days-of-week         weekday picker values (GET)
/// /recurring-rides/options/schedule-types       schedule type picker values (GET)
/// /recurring-rides/{id}                         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/recurring-rides/", recurring_rides::collection())
        .nest("/recurring-rides", recurring_rides::router())
}
