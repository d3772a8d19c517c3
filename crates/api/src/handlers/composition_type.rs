//! Handlers for the `/composition-types` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::lookup::{CompositionType, CreateCompositionType, UpdateCompositionType};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::CompositionTypeRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/composition-types
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateCompositionType>,
) -> AppResult<(StatusCode, Json<CompositionType>)> {
    validate_input(&input)?;
    let composition_type = CompositionTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(composition_type)))
}

/// GET /api/v1/composition-types
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<CompositionType>>> {
    let composition_types = CompositionTypeRepo::list(&state.pool, &params).await?;
    Ok(Json(composition_types))
}

/// GET /api/v1/composition-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<CompositionType>> {
    let composition_type = CompositionTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CompositionType",
            id,
        }))?;
    Ok(Json(composition_type))
}

/// PUT /api/v1/composition-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompositionType>,
) -> AppResult<Json<CompositionType>> {
    validate_input(&input)?;
    let composition_type = CompositionTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CompositionType",
            id,
        }))?;
    Ok(Json(composition_type))
}

/// DELETE /api/v1/composition-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CompositionTypeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CompositionType",
            id,
        }))
    }
}

/// GET /api/v1/composition-types/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "composition_types", id).await
}
