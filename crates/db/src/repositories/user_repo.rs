//! Repository for the `users` table.

use commute_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user::{CreateUser, User, UserSummary};

const COLUMNS: &str = "id, name, email, photo_url, is_driver, created_at";

/// Read access to users plus the inserts needed for seeding.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Runs on a pool or inside a caller's transaction.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, photo_url, is_driver) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.photo_url)
            .bind(input.is_driver)
            .fetch_one(executor)
            .await
    }

    /// Driver cards for a batch of user ids. Unknown ids are skipped.
    pub async fn find_summaries(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<UserSummary>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, UserSummary>(
            "SELECT id, name, photo_url FROM users WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Number of users, used to decide whether demo data may be seeded.
    pub async fn count<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(executor)
            .await?;
        Ok(row.0)
    }
}
