//! Handlers for the `/global-actors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::person::{CreateGlobalActor, GlobalActor, UpdateGlobalActor};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::GlobalActorRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/global-actors
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateGlobalActor>,
) -> AppResult<(StatusCode, Json<GlobalActor>)> {
    validate_input(&input)?;
    let actor = GlobalActorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /api/v1/global-actors
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<GlobalActor>>> {
    let actors = GlobalActorRepo::list(&state.pool, &params).await?;
    Ok(Json(actors))
}

/// GET /api/v1/global-actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<GlobalActor>> {
    let actor = GlobalActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GlobalActor",
            id,
        }))?;
    Ok(Json(actor))
}

/// PUT /api/v1/global-actors/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGlobalActor>,
) -> AppResult<Json<GlobalActor>> {
    validate_input(&input)?;
    let actor = GlobalActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GlobalActor",
            id,
        }))?;
    Ok(Json(actor))
}

/// DELETE /api/v1/global-actors/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GlobalActorRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "GlobalActor",
            id,
        }))
    }
}

/// GET /api/v1/global-actors/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "global_actors", id).await
}
