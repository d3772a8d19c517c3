//! Handlers for the `/stamp-statuses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::lookup::{CreateStampStatus, StampStatus, UpdateStampStatus};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::StampStatusRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/stamp-statuses
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateStampStatus>,
) -> AppResult<(StatusCode, Json<StampStatus>)> {
    validate_input(&input)?;
    let status = StampStatusRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// GET /api/v1/stamp-statuses
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<StampStatus>>> {
    let statuses = StampStatusRepo::list(&state.pool, &params).await?;
    Ok(Json(statuses))
}

/// GET /api/v1/stamp-statuses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<StampStatus>> {
    let status = StampStatusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StampStatus",
            id,
        }))?;
    Ok(Json(status))
}

/// PUT /api/v1/stamp-statuses/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStampStatus>,
) -> AppResult<Json<StampStatus>> {
    validate_input(&input)?;
    let status = StampStatusRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StampStatus",
            id,
        }))?;
    Ok(Json(status))
}

/// DELETE /api/v1/stamp-statuses/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StampStatusRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "StampStatus",
            id,
        }))
    }
}

/// GET /api/v1/stamp-statuses/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "stamp_statuses", id).await
}
