//! Repository for the `recurring_rides` table.
//!
//! Mutations are owner-scoped: `update` and `delete` match on `id AND
//! driver_id` in a single statement, so a ride owned by someone else looks
//! exactly like a ride that does not exist.

use commute_core::recurring_ride::RideStatus;
use commute_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::recurring_ride::{CreateRecurringRide, RecurringRide, UpdateRecurringRide};

const COLUMNS: &str = "id, driver_id, car_id, start_location, end_location, day_of_week, \
     start_time, seats_available, total_fare, schedule_type, status, created_at, updated_at";

/// Storage side of the recurring ride registry.
pub struct RecurringRideRepo;

impl RecurringRideRepo {
    /// Active rides, optionally restricted to one weekday, capped at `limit`.
    ///
    /// Ordered by id so the capped window is stable; there is no cursor for
    /// reading past it.
    pub async fn list_active(
        pool: &PgPool,
        limit: i64,
        day_of_week: Option<i16>,
    ) -> Result<Vec<RecurringRide>, sqlx::Error> {
        match day_of_week {
            Some(day) => Self::query_by_day(pool, day, Some(limit)).await,
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM recurring_rides \
                     WHERE status = $1 \
                     ORDER BY id \
                     LIMIT $2"
                );
                sqlx::query_as::<_, RecurringRide>(&query)
                    .bind(RideStatus::Active.as_str())
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// All active rides on exactly `day_of_week`.
    pub async fn list_by_day(
        pool: &PgPool,
        day_of_week: i16,
    ) -> Result<Vec<RecurringRide>, sqlx::Error> {
        Self::query_by_day(pool, day_of_week, None).await
    }

    async fn query_by_day(
        pool: &PgPool,
        day_of_week: i16,
        limit: Option<i64>,
    ) -> Result<Vec<RecurringRide>, sqlx::Error> {
        // LIMIT NULL means no limit in PostgreSQL.
        let query = format!(
            "SELECT {COLUMNS} FROM recurring_rides \
             WHERE status = $1 AND day_of_week = $2 \
             ORDER BY id \
             LIMIT $3"
        );
        sqlx::query_as::<_, RecurringRide>(&query)
            .bind(RideStatus::Active.as_str())
            .bind(day_of_week)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Every ride owned by `driver_id`, whatever its status.
    pub async fn list_for_driver(
        pool: &PgPool,
        driver_id: DbId,
    ) -> Result<Vec<RecurringRide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recurring_rides \
             WHERE driver_id = $1 \
             ORDER BY day_of_week, start_time, id"
        );
        sqlx::query_as::<_, RecurringRide>(&query)
            .bind(driver_id)
            .fetch_all(pool)
            .await
    }

    /// Find a ride by ID regardless of owner or status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RecurringRide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recurring_rides WHERE id = $1");
        sqlx::query_as::<_, RecurringRide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new ride owned by `driver_id`. Status always starts `active`.
    ///
    /// Runs on a pool or inside a caller's transaction (demo seeding).
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        driver_id: DbId,
        input: &CreateRecurringRide,
    ) -> Result<RecurringRide, sqlx::Error> {
        let query = format!(
            "INSERT INTO recurring_rides \
                (driver_id, car_id, start_location, end_location, day_of_week, \
                 start_time, seats_available, total_fare, schedule_type, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecurringRide>(&query)
            .bind(driver_id)
            .bind(input.car_id)
            .bind(&input.start_location)
            .bind(&input.end_location)
            .bind(input.day_of_week)
            .bind(input.start_time)
            .bind(input.seats_available)
            .bind(input.total_fare)
            .bind(input.schedule_type.as_str())
            .bind(RideStatus::Active.as_str())
            .fetch_one(executor)
            .await
    }

    /// Apply a partial update to a ride owned by `driver_id`.
    ///
    /// Only non-`None` fields are written. `updated_at` uses
    /// `clock_timestamp()` so it advances even within one transaction.
    /// Returns `None` when no row matches both `id` and `driver_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        driver_id: DbId,
        input: &UpdateRecurringRide,
    ) -> Result<Option<RecurringRide>, sqlx::Error> {
        let query = format!(
            "UPDATE recurring_rides SET \
                car_id = COALESCE($3, car_id), \
                start_location = COALESCE($4, start_location), \
                end_location = COALESCE($5, end_location), \
                day_of_week = COALESCE($6, day_of_week), \
                start_time = COALESCE($7, start_time), \
                seats_available = COALESCE($8, seats_available), \
                total_fare = COALESCE($9, total_fare), \
                schedule_type = COALESCE($10, schedule_type), \
                status = COALESCE($11, status), \
                updated_at = clock_timestamp() \
             WHERE id = $1 AND driver_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecurringRide>(&query)
            .bind(id)
            .bind(driver_id)
            .bind(input.car_id)
            .bind(&input.start_location)
            .bind(&input.end_location)
            .bind(input.day_of_week)
            .bind(input.start_time)
            .bind(input.seats_available)
            .bind(input.total_fare)
            .bind(input.schedule_type.map(|t| t.as_str()))
            .bind(input.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a ride owned by `driver_id`. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId, driver_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recurring_rides WHERE id = $1 AND driver_id = $2")
            .bind(id)
            .bind(driver_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
