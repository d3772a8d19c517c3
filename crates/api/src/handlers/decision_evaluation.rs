//! Handlers for the `/decision-evaluations` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::decision::{CreateDecisionEvaluation, DecisionEvaluation, UpdateDecisionEvaluation};
use storyverse_db::models::PageParams;
use storyverse_db::repositories::DecisionEvaluationRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/decision-evaluations
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateDecisionEvaluation>,
) -> AppResult<(StatusCode, Json<DecisionEvaluation>)> {
    validate_input(&input)?;
    let evaluation = DecisionEvaluationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(evaluation)))
}

/// GET /api/v1/decision-evaluations
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<DecisionEvaluation>>> {
    let evaluations = DecisionEvaluationRepo::list(&state.pool, &params).await?;
    Ok(Json(evaluations))
}

/// GET /api/v1/decision-evaluations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DecisionEvaluation>> {
    let evaluation = DecisionEvaluationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DecisionEvaluation",
            id,
        }))?;
    Ok(Json(evaluation))
}

/// PUT /api/v1/decision-evaluations/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDecisionEvaluation>,
) -> AppResult<Json<DecisionEvaluation>> {
    validate_input(&input)?;
    let evaluation = DecisionEvaluationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DecisionEvaluation",
            id,
        }))?;
    Ok(Json(evaluation))
}

/// DELETE /api/v1/decision-evaluations/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DecisionEvaluationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "DecisionEvaluation",
            id,
        }))
    }
}

/// GET /api/v1/decision-evaluations/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "decision_evaluations", id).await
}
