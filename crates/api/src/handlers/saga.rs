//! Handlers for the `/sagas` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::saga::{CreateSaga, Saga, SagaListParams, UpdateSaga};
use storyverse_db::repositories::SagaRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/sagas
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateSaga>,
) -> AppResult<(StatusCode, Json<Saga>)> {
    validate_input(&input)?;
    let saga = SagaRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(saga)))
}

/// GET /api/v1/sagas
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SagaListParams>,
) -> AppResult<Json<Vec<Saga>>> {
    let sagas = SagaRepo::list(&state.pool, &params).await?;
    Ok(Json(sagas))
}

/// GET /api/v1/sagas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Saga>> {
    let saga = SagaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Saga",
            id,
        }))?;
    Ok(Json(saga))
}

/// PUT /api/v1/sagas/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSaga>,
) -> AppResult<Json<Saga>> {
    validate_input(&input)?;
    let saga = SagaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Saga",
            id,
        }))?;
    Ok(Json(saga))
}

/// DELETE /api/v1/sagas/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SagaRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Saga",
            id,
        }))
    }
}

/// GET /api/v1/sagas/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "sagas", id).await
}
