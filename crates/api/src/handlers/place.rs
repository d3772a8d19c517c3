//! Handlers for the `/places` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::place::{CreatePlace, Place, PlaceListParams, UpdatePlace};
use storyverse_db::repositories::PlaceRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/places
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreatePlace>,
) -> AppResult<(StatusCode, Json<Place>)> {
    validate_input(&input)?;
    let place = PlaceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(place)))
}

/// GET /api/v1/places
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<PlaceListParams>,
) -> AppResult<Json<Vec<Place>>> {
    let places = PlaceRepo::list(&state.pool, &params).await?;
    Ok(Json(places))
}

/// GET /api/v1/places/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Place>> {
    let place = PlaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))?;
    Ok(Json(place))
}

/// PUT /api/v1/places/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlace>,
) -> AppResult<Json<Place>> {
    validate_input(&input)?;
    let place = PlaceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))?;
    Ok(Json(place))
}

/// DELETE /api/v1/places/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PlaceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))
    }
}

/// GET /api/v1/places/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "places", id).await
}
