//! Handlers for the `/user-stamps` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::person::{CreateUserStamp, UpdateUserStamp, UserStamp, UserStampListParams};
use storyverse_db::repositories::UserStampRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/user-stamps
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateUserStamp>,
) -> AppResult<(StatusCode, Json<UserStamp>)> {
    let stamp = UserStampRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(stamp)))
}

/// GET /api/v1/user-stamps
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<UserStampListParams>,
) -> AppResult<Json<Vec<UserStamp>>> {
    let stamps = UserStampRepo::list(&state.pool, &params).await?;
    Ok(Json(stamps))
}

/// GET /api/v1/user-stamps/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserStamp>> {
    let stamp = UserStampRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserStamp",
            id,
        }))?;
    Ok(Json(stamp))
}

/// PUT /api/v1/user-stamps/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserStamp>,
) -> AppResult<Json<UserStamp>> {
    let stamp = UserStampRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserStamp",
            id,
        }))?;
    Ok(Json(stamp))
}

/// DELETE /api/v1/user-stamps/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UserStampRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "UserStamp",
            id,
        }))
    }
}

/// GET /api/v1/user-stamps/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "user_stamps", id).await
}
