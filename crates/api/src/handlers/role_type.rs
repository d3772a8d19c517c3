//! Handlers for the `/role-types` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::lookup::{CreateRoleType, RoleType, UpdateRoleType};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::RoleTypeRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/role-types
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateRoleType>,
) -> AppResult<(StatusCode, Json<RoleType>)> {
    validate_input(&input)?;
    let role_type = RoleTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(role_type)))
}

/// GET /api/v1/role-types
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<RoleType>>> {
    let role_types = RoleTypeRepo::list(&state.pool, &params).await?;
    Ok(Json(role_types))
}

/// GET /api/v1/role-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<RoleType>> {
    let role_type = RoleTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoleType",
            id,
        }))?;
    Ok(Json(role_type))
}

/// PUT /api/v1/role-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoleType>,
) -> AppResult<Json<RoleType>> {
    validate_input(&input)?;
    let role_type = RoleTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoleType",
            id,
        }))?;
    Ok(Json(role_type))
}

/// DELETE /api/v1/role-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if RoleTypeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "RoleType",
            id,
        }))
    }
}

/// GET /api/v1/role-types/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "role_types", id).await
}
