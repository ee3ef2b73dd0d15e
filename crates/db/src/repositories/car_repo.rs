//! Repository for the `cars` table.

use commute_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::car::{Car, CarSummary, CreateCar};

const COLUMNS: &str = "id, user_id, make, model, color, license_plate, created_at";

/// Read access to cars plus the inserts needed for seeding.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car, returning the created row.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateCar,
    ) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (user_id, make, model, color, license_plate) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(input.user_id)
            .bind(&input.make)
            .bind(&input.model)
            .bind(&input.color)
            .bind(&input.license_plate)
            .fetch_one(executor)
            .await
    }

    /// Car cards for a batch of ids. Unknown ids are skipped.
    pub async fn find_summaries(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<CarSummary>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, CarSummary>(
            "SELECT id, make, model, color, license_plate FROM cars WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }
}
