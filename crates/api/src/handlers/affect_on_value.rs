//! Handlers for the `/affects-on-values` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::fact::{AffectOnValue, AffectOnValueListParams, CreateAffectOnValue, UpdateAffectOnValue};
use storyverse_db::repositories::AffectOnValueRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/affects-on-values
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateAffectOnValue>,
) -> AppResult<(StatusCode, Json<AffectOnValue>)> {
    let affect = AffectOnValueRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(affect)))
}

/// GET /api/v1/affects-on-values
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<AffectOnValueListParams>,
) -> AppResult<Json<Vec<AffectOnValue>>> {
    let affects = AffectOnValueRepo::list(&state.pool, &params).await?;
    Ok(Json(affects))
}

/// GET /api/v1/affects-on-values/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<AffectOnValue>> {
    let affect = AffectOnValueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AffectOnValue",
            id,
        }))?;
    Ok(Json(affect))
}

/// PUT /api/v1/affects-on-values/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAffectOnValue>,
) -> AppResult<Json<AffectOnValue>> {
    let affect = AffectOnValueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AffectOnValue",
            id,
        }))?;
    Ok(Json(affect))
}

/// DELETE /api/v1/affects-on-values/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AffectOnValueRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "AffectOnValue",
            id,
        }))
    }
}

/// GET /api/v1/affects-on-values/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "affects_on_values", id).await
}
