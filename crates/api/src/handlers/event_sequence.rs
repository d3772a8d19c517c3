//! Handlers for the `/event-sequences` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::place::{CreateEventSequence, EventSequence, UpdateEventSequence};
use storyverse_db::models::PageParams;
use storyverse_db::repositories::EventSequenceRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/event-sequences
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateEventSequence>,
) -> AppResult<(StatusCode, Json<EventSequence>)> {
    let sequence = EventSequenceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(sequence)))
}

/// GET /api/v1/event-sequences
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<EventSequence>>> {
    let sequences = EventSequenceRepo::list(&state.pool, &params).await?;
    Ok(Json(sequences))
}

/// GET /api/v1/event-sequences/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventSequence>> {
    let sequence = EventSequenceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventSequence",
            id,
        }))?;
    Ok(Json(sequence))
}

/// PUT /api/v1/event-sequences/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEventSequence>,
) -> AppResult<Json<EventSequence>> {
    let sequence = EventSequenceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EventSequence",
            id,
        }))?;
    Ok(Json(sequence))
}

/// DELETE /api/v1/event-sequences/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EventSequenceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "EventSequence",
            id,
        }))
    }
}

/// GET /api/v1/event-sequences/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "event_sequences", id).await
}
