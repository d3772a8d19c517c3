//! Handlers for the `/decision-types` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::decision::{CreateDecisionType, DecisionType, UpdateDecisionType};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::DecisionTypeRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/decision-types
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateDecisionType>,
) -> AppResult<(StatusCode, Json<DecisionType>)> {
    validate_input(&input)?;
    let decision_type = DecisionTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(decision_type)))
}

/// GET /api/v1/decision-types
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<DecisionType>>> {
    let decision_types = DecisionTypeRepo::list(&state.pool, &params).await?;
    Ok(Json(decision_types))
}

/// GET /api/v1/decision-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DecisionType>> {
    let decision_type = DecisionTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DecisionType",
            id,
        }))?;
    Ok(Json(decision_type))
}

/// PUT /api/v1/decision-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDecisionType>,
) -> AppResult<Json<DecisionType>> {
    validate_input(&input)?;
    let decision_type = DecisionTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DecisionType",
            id,
        }))?;
    Ok(Json(decision_type))
}

/// DELETE /api/v1/decision-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DecisionTypeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "DecisionType",
            id,
        }))
    }
}

/// GET /api/v1/decision-types/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "decision_types", id).await
}
