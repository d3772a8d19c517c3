//! Handlers for the `/compositions` resource. Source file uploads live in
//! [`super::upload`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::saga::{Composition, CompositionListParams, CreateComposition, UpdateComposition};
use storyverse_db::repositories::CompositionRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/compositions
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateComposition>,
) -> AppResult<(StatusCode, Json<Composition>)> {
    validate_input(&input)?;
    let composition = CompositionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(composition)))
}

/// GET /api/v1/compositions
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<CompositionListParams>,
) -> AppResult<Json<Vec<Composition>>> {
    let compositions = CompositionRepo::list(&state.pool, &params).await?;
    Ok(Json(compositions))
}

/// GET /api/v1/compositions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Composition>> {
    let composition = CompositionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Composition",
            id,
        }))?;
    Ok(Json(composition))
}

/// PUT /api/v1/compositions/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComposition>,
) -> AppResult<Json<Composition>> {
    validate_input(&input)?;
    let composition = CompositionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Composition",
            id,
        }))?;
    Ok(Json(composition))
}

/// DELETE /api/v1/compositions/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CompositionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Composition",
            id,
        }))
    }
}

/// GET /api/v1/compositions/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "compositions", id).await
}
