//! Handlers for hero actions, flat at `/hero-actions` and inline at
//! `/heroes/{hero_id}/actions`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::decision::{CreateHeroAction, HeroAction, UpdateHeroAction};
use storyverse_db::models::PageParams;
use storyverse_db::repositories::HeroActionRepo;

use super::{deletion, hero};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/hero-actions
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateHeroAction>,
) -> AppResult<(StatusCode, Json<HeroAction>)> {
    let action = HeroActionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(action)))
}

/// GET /api/v1/hero-actions
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<HeroAction>>> {
    let actions = HeroActionRepo::list(&state.pool, &params).await?;
    Ok(Json(actions))
}

/// GET /api/v1/hero-actions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroAction>> {
    let action = HeroActionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroAction",
            id,
        }))?;
    Ok(Json(action))
}

/// PUT /api/v1/hero-actions/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroAction>,
) -> AppResult<Json<HeroAction>> {
    let action = HeroActionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroAction",
            id,
        }))?;
    Ok(Json(action))
}

/// DELETE /api/v1/hero-actions/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if HeroActionRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "HeroAction",
            id,
        }))
    }
}

/// GET /api/v1/hero-actions/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "hero_actions", id).await
}

/// GET /api/v1/heroes/{hero_id}/actions
pub async fn list_by_hero(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(hero_id): Path<DbId>,
) -> AppResult<Json<Vec<HeroAction>>> {
    hero::require_hero(&state.pool, hero_id).await?;
    let actions = HeroActionRepo::list_by_hero(&state.pool, hero_id).await?;
    Ok(Json(actions))
}

/// POST /api/v1/heroes/{hero_id}/actions
///
/// The parent id comes from the path; any `hero_id` in the body is ignored.
pub async fn create_for_hero(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(hero_id): Path<DbId>,
    Json(mut input): Json<CreateHeroAction>,
) -> AppResult<(StatusCode, Json<HeroAction>)> {
    input.hero_id = Some(hero_id);
    hero::require_hero(&state.pool, hero_id).await?;
    let action = HeroActionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(action)))
}
