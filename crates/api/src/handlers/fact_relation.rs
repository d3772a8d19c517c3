//! Handlers for fact relations, flat at `/fact-relations` and inline at
//! `/facts/{fact_id}/relations`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::fact::{CreateFactRelation, FactRelation, UpdateFactRelation};
use storyverse_db::models::PageParams;
use storyverse_db::repositories::FactRelationRepo;

use super::{deletion, fact};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/fact-relations
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateFactRelation>,
) -> AppResult<(StatusCode, Json<FactRelation>)> {
    validate_input(&input)?;
    let relation = FactRelationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(relation)))
}

/// GET /api/v1/fact-relations
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<FactRelation>>> {
    let relations = FactRelationRepo::list(&state.pool, &params).await?;
    Ok(Json(relations))
}

/// GET /api/v1/fact-relations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<FactRelation>> {
    let relation = FactRelationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FactRelation",
            id,
        }))?;
    Ok(Json(relation))
}

/// PUT /api/v1/fact-relations/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFactRelation>,
) -> AppResult<Json<FactRelation>> {
    validate_input(&input)?;
    let relation = FactRelationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FactRelation",
            id,
        }))?;
    Ok(Json(relation))
}

/// DELETE /api/v1/fact-relations/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FactRelationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "FactRelation",
            id,
        }))
    }
}

/// GET /api/v1/fact-relations/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "fact_relations", id).await
}

/// GET /api/v1/facts/{fact_id}/relations
pub async fn list_by_fact(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(fact_id): Path<DbId>,
) -> AppResult<Json<Vec<FactRelation>>> {
    fact::require_fact(&state.pool, fact_id).await?;
    let relations = FactRelationRepo::list_by_based_fact(&state.pool, fact_id).await?;
    Ok(Json(relations))
}

/// POST /api/v1/facts/{fact_id}/relations
///
/// The parent id comes from the path; any `based_fact_id` in the body is ignored.
pub async fn create_for_fact(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(fact_id): Path<DbId>,
    Json(mut input): Json<CreateFactRelation>,
) -> AppResult<(StatusCode, Json<FactRelation>)> {
    input.based_fact_id = Some(fact_id);
    validate_input(&input)?;
    fact::require_fact(&state.pool, fact_id).await?;
    let relation = FactRelationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(relation)))
}
