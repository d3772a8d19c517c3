//! Staff accounts: the login identities behind user profiles.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{DbId, Timestamp};

/// A row from the `accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an account. The password is hashed by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccount {
    pub username: String,
    pub password_hash: String,
    pub is_staff: bool,
}
