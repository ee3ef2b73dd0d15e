//! Vehicle rows referenced by recurring rides.

use commute_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    pub user_id: DbId,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a car.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCar {
    pub user_id: DbId,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    pub license_plate: Option<String>,
}

/// Vehicle card embedded in ride responses.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CarSummary {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    pub license_plate: Option<String>,
}
