//! Handlers for hero values, flat at `/hero-values` and inline at
//! `/heroes/{hero_id}/values`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::hero::{CreateHeroValue, HeroValue, UpdateHeroValue};
use storyverse_db::models::PageParams;
use storyverse_db::repositories::HeroValueRepo;

use super::{deletion, hero};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/hero-values
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateHeroValue>,
) -> AppResult<(StatusCode, Json<HeroValue>)> {
    let value = HeroValueRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(value)))
}

/// GET /api/v1/hero-values
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<HeroValue>>> {
    let values = HeroValueRepo::list(&state.pool, &params).await?;
    Ok(Json(values))
}

/// GET /api/v1/hero-values/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroValue>> {
    let value = HeroValueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroValue",
            id,
        }))?;
    Ok(Json(value))
}

/// PUT /api/v1/hero-values/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroValue>,
) -> AppResult<Json<HeroValue>> {
    let value = HeroValueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HeroValue",
            id,
        }))?;
    Ok(Json(value))
}

/// DELETE /api/v1/hero-values/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if HeroValueRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "HeroValue",
            id,
        }))
    }
}

/// GET /api/v1/hero-values/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "hero_values", id).await
}

/// GET /api/v1/heroes/{hero_id}/values
pub async fn list_by_hero(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(hero_id): Path<DbId>,
) -> AppResult<Json<Vec<HeroValue>>> {
    hero::require_hero(&state.pool, hero_id).await?;
    let values = HeroValueRepo::list_by_hero(&state.pool, hero_id).await?;
    Ok(Json(values))
}

/// POST /api/v1/heroes/{hero_id}/values
///
/// The parent id comes from the path; any `hero_id` in the body is ignored.
pub async fn create_for_hero(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(hero_id): Path<DbId>,
    Json(mut input): Json<CreateHeroValue>,
) -> AppResult<(StatusCode, Json<HeroValue>)> {
    input.hero_id = Some(hero_id);
    hero::require_hero(&state.pool, hero_id).await?;
    let value = HeroValueRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(value)))
}
