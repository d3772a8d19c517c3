//! Handlers for the `/value-dimensions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::fact::{CreateValueDimension, UpdateValueDimension, ValueDimension};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::ValueDimensionRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/value-dimensions
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateValueDimension>,
) -> AppResult<(StatusCode, Json<ValueDimension>)> {
    validate_input(&input)?;
    let dimension = ValueDimensionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(dimension)))
}

/// GET /api/v1/value-dimensions
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<ValueDimension>>> {
    let dimensions = ValueDimensionRepo::list(&state.pool, &params).await?;
    Ok(Json(dimensions))
}

/// GET /api/v1/value-dimensions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<ValueDimension>> {
    let dimension = ValueDimensionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ValueDimension",
            id,
        }))?;
    Ok(Json(dimension))
}

/// PUT /api/v1/value-dimensions/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateValueDimension>,
) -> AppResult<Json<ValueDimension>> {
    validate_input(&input)?;
    let dimension = ValueDimensionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ValueDimension",
            id,
        }))?;
    Ok(Json(dimension))
}

/// DELETE /api/v1/value-dimensions/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ValueDimensionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ValueDimension",
            id,
        }))
    }
}

/// GET /api/v1/value-dimensions/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "value_dimensions", id).await
}
