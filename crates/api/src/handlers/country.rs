//! Handlers for the `/countries` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::types::DbId;
use storyverse_core::validation::validate_input;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::models::lookup::{Country, CreateCountry, UpdateCountry};
use storyverse_db::models::SearchParams;
use storyverse_db::repositories::CountryRepo;

use super::deletion;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/countries
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Json(input): Json<CreateCountry>,
) -> AppResult<(StatusCode, Json<Country>)> {
    validate_input(&input)?;
    let country = CountryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

/// GET /api/v1/countries
pub async fn list(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Country>>> {
    let countries = CountryRepo::list(&state.pool, &params).await?;
    Ok(Json(countries))
}

/// GET /api/v1/countries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<Country>> {
    let country = CountryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(country))
}

/// PUT /api/v1/countries/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCountry>,
) -> AppResult<Json<Country>> {
    validate_input(&input)?;
    let country = CountryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(country))
}

/// DELETE /api/v1/countries/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CountryRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))
    }
}

/// GET /api/v1/countries/{id}/delete-preview
pub async fn delete_preview(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    deletion::preview(&state, "countries", id).await
}
