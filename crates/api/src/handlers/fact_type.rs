//! Handlers for the `/fact-types` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::fact::{CreateFactType, FactType, FactTypeListParams, UpdateFactType};
use storyverse_db::repositories::FactTypeRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/fact-types
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateFactType>,
) -> AppResult<(StatusCode, Json<FactType>)> {
    validate_input(&input)?;
    let fact_type = FactTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(fact_type)))
}

/// GET /api/v1/fact-types
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<FactTypeListParams>,
) -> AppResult<Json<Vec<FactType>>> {
    let fact_types = FactTypeRepo::list(&state.pool, &params).await?;
    Ok(Json(fact_types))
}

/// GET /api/v1/fact-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<FactType>> {
    let fact_type = FactTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FactType",
            id,
        }))?;
    Ok(Json(fact_type))
}

/// PUT /api/v1/fact-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFactType>,
) -> AppResult<Json<FactType>> {
    validate_input(&input)?;
    let fact_type = FactTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FactType",
            id,
        }))?;
    Ok(Json(fact_type))
}

/// DELETE /api/v1/fact-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FactTypeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "FactType",
            id,
        }))
    }
}

/// GET /api/v1/fact-types/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "fact_types", id).await
}
