//! Recurring ride models and DTOs.

use chrono::NaiveTime;
use commute_core::recurring_ride::{start_time_format, RideStatus, ScheduleType};
use commute_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::car::CarSummary;
use super::user::UserSummary;

/// A row from the `recurring_rides` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct RecurringRide {
    pub id: DbId,
    pub driver_id: DbId,
    pub car_id: DbId,
    pub start_location: String,
    pub end_location: String,
    pub day_of_week: i16,
    #[serde(with = "start_time_format")]
    pub start_time: NaiveTime,
    pub seats_available: i32,
    pub total_fare: f64,
    #[sqlx(try_from = "String")]
    pub schedule_type: ScheduleType,
    #[sqlx(try_from = "String")]
    pub status: RideStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a recurring ride.
///
/// No `driver_id` or `status` field: the owner comes
/// from the authenticated caller and new rides always start `active`. Extra
/// JSON keys are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecurringRide {
    pub car_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub start_location: String,
    #[validate(length(min = 1, max = 255))]
    pub end_location: String,
    #[validate(range(min = 0, max = 6))]
    pub day_of_week: i16,
    #[serde(with = "start_time_format")]
    pub start_time: NaiveTime,
    #[validate(range(min = 0))]
    pub seats_available: i32,
    #[validate(range(min = 0.0))]
    pub total_fare: f64,
    #[serde(default)]
    pub schedule_type: ScheduleType,
}

/// DTO for a partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRecurringRide {
    pub car_id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub start_location: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub end_location: Option<String>,
    #[validate(range(min = 0, max = 6))]
    pub day_of_week: Option<i16>,
    #[serde(default, with = "start_time_format::option")]
    pub start_time: Option<NaiveTime>,
    #[validate(range(min = 0))]
    pub seats_available: Option<i32>,
    #[validate(range(min = 0.0))]
    pub total_fare: Option<f64>,
    pub schedule_type: Option<ScheduleType>,
    pub status: Option<RideStatus>,
}

/// A recurring ride with its driver and car cards attached for display.
///
/// The relations are optional: a missing row simply serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct RecurringRideDetail {
    #[serde(flatten)]
    pub ride: RecurringRide,
    pub driver: Option<UserSummary>,
    pub car: Option<CarSummary>,
}
