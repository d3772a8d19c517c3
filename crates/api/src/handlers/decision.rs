//! Handlers for decisions, flat at `/decisions` and inline at
//! `/heroes/{hero_id}/decisions`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::decision::{CreateDecision, Decision, UpdateDecision};
use storyverse_db::models::PageParams;
use storyverse_db::repositories::DecisionRepo;

use super::{deletion, hero};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/decisions
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateDecision>,
) -> AppResult<(StatusCode, Json<Decision>)> {
    let decision = DecisionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(decision)))
}

/// GET /api/v1/decisions
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<Decision>>> {
    let decisions = DecisionRepo::list(&state.pool, &params).await?;
    Ok(Json(decisions))
}

/// GET /api/v1/decisions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Decision>> {
    let decision = DecisionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Decision",
            id,
        }))?;
    Ok(Json(decision))
}

/// PUT /api/v1/decisions/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDecision>,
) -> AppResult<Json<Decision>> {
    let decision = DecisionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Decision",
            id,
        }))?;
    Ok(Json(decision))
}

/// DELETE /api/v1/decisions/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DecisionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Decision",
            id,
        }))
    }
}

/// GET /api/v1/decisions/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "decisions", id).await
}

/// GET /api/v1/heroes/{hero_id}/decisions
pub async fn list_by_hero(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(hero_id): Path<DbId>,
) -> AppResult<Json<Vec<Decision>>> {
    hero::require_hero(&state.pool, hero_id).await?;
    let decisions = DecisionRepo::list_by_hero(&state.pool, hero_id).await?;
    Ok(Json(decisions))
}

/// POST /api/v1/heroes/{hero_id}/decisions
///
/// The parent id comes from the path; any `hero_id` in the body is ignored.
pub async fn create_for_hero(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(hero_id): Path<DbId>,
    Json(mut input): Json<CreateDecision>,
) -> AppResult<(StatusCode, Json<Decision>)> {
    input.hero_id = Some(hero_id);
    hero::require_hero(&state.pool, hero_id).await?;
    let decision = DecisionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(decision)))
}
