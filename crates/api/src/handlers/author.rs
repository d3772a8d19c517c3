//! Handlers for the `/authors` resource. Photo uploads live in
//! [`super::upload`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::person::{Author, AuthorListParams, CreateAuthor, UpdateAuthor};
use storyverse_db::repositories::AuthorRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/authors
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    validate_input(&input)?;
    let author = AuthorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /api/v1/authors
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<AuthorListParams>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = AuthorRepo::list(&state.pool, &params).await?;
    Ok(Json(authors))
}

/// GET /api/v1/authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Author>> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;
    Ok(Json(author))
}

/// PUT /api/v1/authors/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    validate_input(&input)?;
    let author = AuthorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;
    Ok(Json(author))
}

/// DELETE /api/v1/authors/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AuthorRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))
    }
}

/// GET /api/v1/authors/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "authors", id).await
}
