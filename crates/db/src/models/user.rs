//! User rows referenced as ride drivers.

use commute_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: Option<String>,
    pub email: String,
    pub photo_url: Option<String>,
    pub is_driver: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a user (seeding and tests; account management is
/// handled elsewhere).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: String,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub is_driver: bool,
}

/// Public driver card embedded in ride responses.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub name: Option<String>,
    pub photo_url: Option<String>,
}
