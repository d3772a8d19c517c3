//! Handlers for the `/facts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::fact::{CreateFact, Fact, FactDetail, FactListParams, UpdateFact};
use storyverse_db::repositories::FactRepo;
use storyverse_db::DbPool;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/facts
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateFact>,
) -> AppResult<(StatusCode, Json<Fact>)> {
    validate_input(&input)?;
    let fact = FactRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(fact)))
}

/// GET /api/v1/facts
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<FactListParams>,
) -> AppResult<Json<Vec<Fact>>> {
    let facts = FactRepo::list(&state.pool, &params).await?;
    Ok(Json(facts))
}

/// GET /api/v1/facts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Fact>> {
    let fact = FactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fact",
            id,
        }))?;
    Ok(Json(fact))
}

/// PUT /api/v1/facts/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFact>,
) -> AppResult<Json<Fact>> {
    validate_input(&input)?;
    let fact = FactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fact",
            id,
        }))?;
    Ok(Json(fact))
}

/// DELETE /api/v1/facts/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FactRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Fact",
            id,
        }))
    }
}

/// GET /api/v1/facts/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "facts", id).await
}

/// GET /api/v1/facts/{id}/detail
///
/// The fact with the relations it is the base of.
pub async fn get_detail(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FactDetail>>> {
    let detail = FactRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fact",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail }))
}

/// Fail with 404 unless the fact exists.
pub(super) async fn require_fact(pool: &DbPool, id: DbId) -> AppResult<Fact> {
    FactRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fact",
            id,
        }))
}
