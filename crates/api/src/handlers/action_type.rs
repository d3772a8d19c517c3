//! Handlers for the `/action-types` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::decision::{ActionType, CreateActionType, UpdateActionType};
use storyverse_db::models::PageParams;
use storyverse_db::repositories::ActionTypeRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/action-types
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateActionType>,
) -> AppResult<(StatusCode, Json<ActionType>)> {
    validate_input(&input)?;
    let action_type = ActionTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(action_type)))
}

/// GET /api/v1/action-types
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ActionType>>> {
    let action_types = ActionTypeRepo::list(&state.pool, &params).await?;
    Ok(Json(action_types))
}

/// GET /api/v1/action-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<ActionType>> {
    let action_type = ActionTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ActionType",
            id,
        }))?;
    Ok(Json(action_type))
}

/// PUT /api/v1/action-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActionType>,
) -> AppResult<Json<ActionType>> {
    validate_input(&input)?;
    let action_type = ActionTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ActionType",
            id,
        }))?;
    Ok(Json(action_type))
}

/// DELETE /api/v1/action-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ActionTypeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ActionType",
            id,
        }))
    }
}

/// GET /api/v1/action-types/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "action_types", id).await
}
