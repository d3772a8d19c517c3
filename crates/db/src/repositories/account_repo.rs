//! Repository for the `accounts` table.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::{delete_row, page};
use crate::models::account::{Account, CreateAccount};
use crate::models::SearchParams;

const COLUMNS: &str = "id, username, password_hash, is_staff, is_active, created_at, updated_at";

/// Provides CRUD for staff accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new active account, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (username, password_hash, is_staff)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(input.is_staff)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by its exact username. Used for login.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE username = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Enable or disable an account.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query =
            format!("UPDATE accounts SET is_active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// List accounts whose username contains every search word.
    pub async fn list(pool: &PgPool, params: &SearchParams) -> Result<Vec<Account>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM accounts
             WHERE username ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete an account and its user profile. User stamps of that profile
    /// go with it; records stamped by them keep a cleared stamp.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "accounts", id).await
    }
}
