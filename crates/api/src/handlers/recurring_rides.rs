//! Handlers for the recurring ride registry.
//!
//! Reads are public. Create, update and delete require a bearer token and
//! always act on behalf of the token's user: update and delete are scoped
//! to `id AND driver_id` inside the repository, so touching somebody else's
//! ride is reported exactly like touching a ride that does not exist.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use commute_core::error::CoreError;
use commute_core::recurring_ride::{self, DayOfWeekOption, ScheduleTypeOption};
use commute_core::types::DbId;
use commute_db::models::recurring_ride::{
    CreateRecurringRide, RecurringRide, RecurringRideDetail, UpdateRecurringRide,
};
use commute_db::repositories::{CarRepo, RecurringRideRepo, UserRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListRecurringRidesParams;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Recurring ride";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Attach driver and car cards to a batch of rides.
///
/// One query per relation regardless of batch size. Rides whose driver or
/// car row is gone keep `null` in that slot.
async fn attach_relations(
    pool: &PgPool,
    rides: Vec<RecurringRide>,
) -> AppResult<Vec<RecurringRideDetail>> {
    let mut driver_ids: Vec<DbId> = rides.iter().map(|r| r.driver_id).collect();
    driver_ids.sort_unstable();
    driver_ids.dedup();
    let mut car_ids: Vec<DbId> = rides.iter().map(|r| r.car_id).collect();
    car_ids.sort_unstable();
    car_ids.dedup();

    let drivers: HashMap<DbId, _> = UserRepo::find_summaries(pool, &driver_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();
    let cars: HashMap<DbId, _> = CarRepo::find_summaries(pool, &car_ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    Ok(rides
        .into_iter()
        .map(|ride| RecurringRideDetail {
            driver: drivers.get(&ride.driver_id).cloned(),
            car: cars.get(&ride.car_id).cloned(),
            ride,
        })
        .collect())
}

async fn attach_relations_one(
    pool: &PgPool,
    ride: RecurringRide,
) -> AppResult<RecurringRideDetail> {
    attach_relations(pool, vec![ride])
        .await?
        .pop()
        .ok_or_else(|| AppError::Core(CoreError::Internal("relation join lost a ride".into())))
}

fn not_found_or_unauthorized(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFoundOrUnauthorized { entity: ENTITY, id })
}

// ---------------------------------------------------------------------------
// GET /recurring-rides
// ---------------------------------------------------------------------------

/// List active rides, optionally for a single weekday.
///
/// `limit` defaults to 50. A value outside `1..=100` is clamped into that
/// range rather than rejected; `day_of_week` outside `0..=6` is a 400.
pub async fn list_recurring_rides(
    State(state): State<AppState>,
    Query(params): Query<ListRecurringRidesParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(day) = params.day_of_week {
        recurring_ride::validate_day_of_week(day)?;
    }
    let limit = recurring_ride::clamp_list_limit(params.limit);

    let rides = RecurringRideRepo::list_active(&state.pool, limit, params.day_of_week).await?;
    tracing::debug!(
        count = rides.len(),
        limit,
        day_of_week = ?params.day_of_week,
        "Listed active recurring rides"
    );
    Ok(Json(attach_relations(&state.pool, rides).await?))
}

// ---------------------------------------------------------------------------
// GET /recurring-rides/days/{day_of_week}
// ---------------------------------------------------------------------------

/// All active rides running on `day_of_week`.
pub async fn list_recurring_rides_by_day(
    State(state): State<AppState>,
    Path(day_of_week): Path<i16>,
) -> AppResult<impl IntoResponse> {
    recurring_ride::validate_day_of_week(day_of_week)?;

    let rides = RecurringRideRepo::list_by_day(&state.pool, day_of_week).await?;
    tracing::debug!(
        count = rides.len(),
        day = recurring_ride::day_label(day_of_week),
        "Listed recurring rides by day"
    );
    Ok(Json(attach_relations(&state.pool, rides).await?))
}

// ---------------------------------------------------------------------------
// GET /recurring-rides/my-recurring-rides
// ---------------------------------------------------------------------------

/// Every ride owned by the caller, including paused and cancelled ones.
pub async fn list_my_recurring_rides(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rides = RecurringRideRepo::list_for_driver(&state.pool, auth.user_id).await?;
    tracing::debug!(count = rides.len(), driver_id = auth.user_id, "Listed own recurring rides");
    Ok(Json(attach_relations(&state.pool, rides).await?))
}

// ---------------------------------------------------------------------------
// POST /recurring-rides
// ---------------------------------------------------------------------------

/// Create a ride owned by the caller.
pub async fn create_recurring_ride(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRecurringRide>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let created = RecurringRideRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(
        id = created.id,
        driver_id = created.driver_id,
        day_of_week = created.day_of_week,
        "Recurring ride created"
    );
    let detail = attach_relations_one(&state.pool, created).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

// ---------------------------------------------------------------------------
// GET /recurring-rides/{id}
// ---------------------------------------------------------------------------

/// Get a single ride by ID, whatever its status or owner.
pub async fn get_recurring_ride(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ride = RecurringRideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(attach_relations_one(&state.pool, ride).await?))
}

// ---------------------------------------------------------------------------
// PUT /recurring-rides/{id}
// ---------------------------------------------------------------------------

/// Partially update one of the caller's rides.
pub async fn update_recurring_ride(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRecurringRide>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let updated = RecurringRideRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| not_found_or_unauthorized(id))?;
    tracing::info!(id, driver_id = auth.user_id, status = %updated.status, "Recurring ride updated");
    Ok(Json(attach_relations_one(&state.pool, updated).await?))
}

// ---------------------------------------------------------------------------
// DELETE /recurring-rides/{id}
// ---------------------------------------------------------------------------

/// Hard-delete one of the caller's rides.
pub async fn delete_recurring_ride(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = RecurringRideRepo::delete(&state.pool, id, auth.user_id).await?;
    if deleted {
        tracing::info!(id, driver_id = auth.user_id, "Recurring ride deleted");
        Ok(Json(MessageResponse {
            message: "Recurring ride deleted successfully",
        }))
    } else {
        Err(not_found_or_unauthorized(id))
    }
}

// ---------------------------------------------------------------------------
// GET /recurring-rides/options/*
// ---------------------------------------------------------------------------

/// Weekday picker values. Static; never touches the database.
pub async fn day_of_week_options() -> Json<Vec<DayOfWeekOption>> {
    Json(recurring_ride::day_of_week_options())
}

/// Schedule type picker values. Static; never touches the database.
pub async fn schedule_type_options() -> Json<Vec<ScheduleTypeOption>> {
    Json(recurring_ride::schedule_type_options())
}
