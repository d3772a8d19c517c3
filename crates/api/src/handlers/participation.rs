//! Handlers for participations, flat at `/participations` and inline at
//! `/episodes/{episode_id}/participations`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::episode::{CreateParticipation, Participation, UpdateParticipation};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::ParticipationRepo;

use super::{deletion, episode};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/participations
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateParticipation>,
) -> AppResult<(StatusCode, Json<Participation>)> {
    let participation = ParticipationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(participation)))
}

/// GET /api/v1/participations
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Participation>>> {
    let participations = ParticipationRepo::list(&state.pool, &params).await?;
    Ok(Json(participations))
}

/// GET /api/v1/participations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Participation>> {
    let participation = ParticipationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participation",
            id,
        }))?;
    Ok(Json(participation))
}

/// PUT /api/v1/participations/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateParticipation>,
) -> AppResult<Json<Participation>> {
    let participation = ParticipationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participation",
            id,
        }))?;
    Ok(Json(participation))
}

/// DELETE /api/v1/participations/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ParticipationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Participation",
            id,
        }))
    }
}

/// GET /api/v1/participations/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "participations", id).await
}

/// GET /api/v1/episodes/{episode_id}/participations
pub async fn list_by_episode(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(episode_id): Path<DbId>,
) -> AppResult<Json<Vec<Participation>>> {
    episode::require_episode(&state.pool, episode_id).await?;
    let participations = ParticipationRepo::list_by_episode(&state.pool, episode_id).await?;
    Ok(Json(participations))
}

/// POST /api/v1/episodes/{episode_id}/participations
///
/// The parent id comes from the path; any `episode_id` in the body is ignored.
pub async fn create_for_episode(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(episode_id): Path<DbId>,
    Json(mut input): Json<CreateParticipation>,
) -> AppResult<(StatusCode, Json<Participation>)> {
    input.episode_id = Some(episode_id);
    episode::require_episode(&state.pool, episode_id).await?;
    let participation = ParticipationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(participation)))
}
