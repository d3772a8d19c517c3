//! Handlers for the `/accounts` resource (staff login identities).
//!
//! Passwords arrive in plaintext and are stored as Argon2id hashes. Staff
//! may not deactivate or delete their own account.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::{not_blank, validate_input};
use storyverse_db::models::account::{Account, CreateAccount};
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::AccountRepo;
use validator::Validate;

use super::deletion;
use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /accounts`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(length(max = 150), custom(function = "not_blank"))]
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub is_staff: bool,
}

/// Request body for `PUT /accounts/{id}/active`.
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// POST /api/v1/accounts
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateAccountRequest>,
) -> AppResult<(StatusCode, Json<Account>)> {
    validate_input(&input)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::create(
        &state.pool,
        &CreateAccount {
            username: input.username,
            password_hash,
            is_staff: input.is_staff,
        },
    )
    .await?;
    tracing::info!(account_id = account.id, is_staff = account.is_staff, "Account created");
    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /api/v1/accounts
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Account>>> {
    let accounts = AccountRepo::list(&state.pool, &params).await?;
    Ok(Json(accounts))
}

/// GET /api/v1/accounts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Account>> {
    let account = AccountRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id,
        }))?;
    Ok(Json(account))
}

/// PUT /api/v1/accounts/{id}/active
pub async fn set_active(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<SetActiveRequest>,
) -> AppResult<Json<Account>> {
    if id == staff.account_id && !input.is_active {
        return Err(AppError::BadRequest(
            "Cannot deactivate your own account".into(),
        ));
    }
    let account = AccountRepo::set_active(&state.pool, id, input.is_active)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id,
        }))?;
    Ok(Json(account))
}

/// DELETE /api/v1/accounts/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == staff.account_id {
        return Err(AppError::BadRequest("Cannot delete your own account".into()));
    }
    if AccountRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id,
        }))
    }
}

/// GET /api/v1/accounts/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "accounts", id).await
}
