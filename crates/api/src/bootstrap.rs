//! First staff account.
//!
//! A fresh database has no accounts, and every catalog route requires a
//! staff token. At startup `main.rs` calls [`ensure_staff_account`] when
//! `BOOTSTRAP_STAFF_USERNAME` and `BOOTSTRAP_STAFF_PASSWORD` are set.

use storyverse_core::error::CoreError;
use storyverse_db::models::account::{Account, CreateAccount};
use storyverse_db::repositories::AccountRepo;
use storyverse_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Create a staff account with the given credentials unless the username
/// is already taken. Returns the new account, or `None` if one existed.
///
/// An existing account is left untouched: its password and flags are not
/// reset.
pub async fn ensure_staff_account(
    pool: &DbPool,
    username: &str,
    password: &str,
) -> AppResult<Option<Account>> {
    if AccountRepo::find_by_username(pool, username).await?.is_some() {
        tracing::debug!(username, "Bootstrap staff account already exists");
        return Ok(None);
    }

    validate_password_strength(password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::create(
        pool,
        &CreateAccount {
            username: username.to_string(),
            password_hash,
            is_staff: true,
        },
    )
    .await?;
    tracing::info!(account_id = account.id, username, "Bootstrap staff account created");
    Ok(Some(account))
}
