//! Handlers for the `/heroes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::hero::{CreateHero, Hero, HeroDetail, HeroListParams, UpdateHero};
use storyverse_db::repositories::HeroRepo;
use storyverse_db::DbPool;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/heroes
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateHero>,
) -> AppResult<(StatusCode, Json<Hero>)> {
    validate_input(&input)?;
    let hero = HeroRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(hero)))
}

/// GET /api/v1/heroes
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<HeroListParams>,
) -> AppResult<Json<Vec<Hero>>> {
    let heroes = HeroRepo::list(&state.pool, &params).await?;
    Ok(Json(heroes))
}

/// GET /api/v1/heroes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Hero>> {
    let hero = HeroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hero",
            id,
        }))?;
    Ok(Json(hero))
}

/// PUT /api/v1/heroes/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHero>,
) -> AppResult<Json<Hero>> {
    validate_input(&input)?;
    let hero = HeroRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hero",
            id,
        }))?;
    Ok(Json(hero))
}

/// DELETE /api/v1/heroes/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if HeroRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Hero",
            id,
        }))
    }
}

/// GET /api/v1/heroes/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "heroes", id).await
}

/// GET /api/v1/heroes/{id}/detail
///
/// The hero with its values, actions and decisions.
pub async fn get_detail(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<HeroDetail>>> {
    let detail = HeroRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hero",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail }))
}

/// Fail with 404 unless the hero exists. Guards the inline collections.
pub(super) async fn require_hero(pool: &DbPool, id: DbId) -> AppResult<Hero> {
    HeroRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hero",
            id,
        }))
}
