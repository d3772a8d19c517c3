//! Handlers for the `/universes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::lookup::{CreateUniverse, Universe, UpdateUniverse};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::UniverseRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/universes
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateUniverse>,
) -> AppResult<(StatusCode, Json<Universe>)> {
    validate_input(&input)?;
    let universe = UniverseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(universe)))
}

/// GET /api/v1/universes
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Universe>>> {
    let universes = UniverseRepo::list(&state.pool, &params).await?;
    Ok(Json(universes))
}

/// GET /api/v1/universes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Universe>> {
    let universe = UniverseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Universe",
            id,
        }))?;
    Ok(Json(universe))
}

/// PUT /api/v1/universes/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUniverse>,
) -> AppResult<Json<Universe>> {
    validate_input(&input)?;
    let universe = UniverseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Universe",
            id,
        }))?;
    Ok(Json(universe))
}

/// DELETE /api/v1/universes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UniverseRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Universe",
            id,
        }))
    }
}

/// GET /api/v1/universes/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "universes", id).await
}
