//! Multipart uploads for the file-backed columns: author and hero photos,
//! composition source files.
//!
//! Files are written under the configured media root before the column is
//! updated. A replaced or cleared file is removed afterwards; removal
//! failures are logged and otherwise ignored.

use std::path::PathBuf;

use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::media::{check_content, stored_path, UploadKind, UPLOAD_FIELD};
use storyverse_core::types::DbId;
use storyverse_db::models::hero::Hero;
use storyverse_db::models::person::Author;
use storyverse_db::models::saga::Composition;
use storyverse_db::repositories::{AuthorRepo, CompositionRepo, HeroRepo};

use super::hero::require_hero;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

/// POST /api/v1/authors/{id}/photo
pub async fn upload_author_photo(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Author>> {
    let author = require_author(&state, id).await?;
    let stored = save_upload(&state, UploadKind::AuthorPhoto, multipart).await?;
    let result = AuthorRepo::set_photo(&state.pool, id, Some(stored.as_str())).await;
    let updated = attach(&state, "Author", id, &stored, result).await?;
    discard(&state, replaced(author.photo_file.as_deref(), &stored)).await;
    Ok(Json(updated))
}

/// DELETE /api/v1/authors/{id}/photo
pub async fn clear_author_photo(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let author = require_author(&state, id).await?;
    AuthorRepo::set_photo(&state.pool, id, None).await?;
    discard(&state, author.photo_file.as_deref()).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn require_author(state: &AppState, id: DbId) -> AppResult<Author> {
    AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))
}

// ---------------------------------------------------------------------------
// Heroes
// ---------------------------------------------------------------------------

/// POST /api/v1/heroes/{id}/photo
pub async fn upload_hero_photo(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Hero>> {
    let hero = require_hero(&state.pool, id).await?;
    let stored = save_upload(&state, UploadKind::HeroPhoto, multipart).await?;
    let result = HeroRepo::set_photo(&state.pool, id, Some(stored.as_str())).await;
    let updated = attach(&state, "Hero", id, &stored, result).await?;
    discard(&state, replaced(hero.photo_file.as_deref(), &stored)).await;
    Ok(Json(updated))
}

/// DELETE /api/v1/heroes/{id}/photo
pub async fn clear_hero_photo(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let hero = require_hero(&state.pool, id).await?;
    HeroRepo::set_photo(&state.pool, id, None).await?;
    discard(&state, hero.photo_file.as_deref()).await;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Compositions
// ---------------------------------------------------------------------------

/// POST /api/v1/compositions/{id}/file
pub async fn upload_composition_file(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Composition>> {
    let composition = require_composition(&state, id).await?;
    let stored = save_upload(&state, UploadKind::CompositionSource, multipart).await?;
    let result = CompositionRepo::set_file_source(&state.pool, id, Some(stored.as_str())).await;
    let updated = attach(&state, "Composition", id, &stored, result).await?;
    discard(&state, replaced(composition.file_source.as_deref(), &stored)).await;
    Ok(Json(updated))
}

/// DELETE /api/v1/compositions/{id}/file
pub async fn clear_composition_file(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let composition = require_composition(&state, id).await?;
    CompositionRepo::set_file_source(&state.pool, id, None).await?;
    discard(&state, composition.file_source.as_deref()).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn require_composition(state: &AppState, id: DbId) -> AppResult<Composition> {
    CompositionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Composition",
            id,
        }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read the `file` field, validate it and write it under the media root.
///
/// Returns the path relative to the media root.
async fn save_upload(
    state: &AppState,
    kind: UploadKind,
    mut multipart: Multipart,
) -> AppResult<String> {
    let (file_name, data) = read_file_field(&mut multipart).await?;
    check_content(kind, &data, state.config.max_upload_bytes)?;

    let relative = stored_path(kind, &file_name, chrono::Utc::now().timestamp_millis());
    let full = media_path(state, &relative);
    if let Some(dir) = full.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create {dir:?}: {e}")))?;
    }
    tokio::fs::write(&full, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write {full:?}: {e}")))?;

    tracing::info!(path = %relative, bytes = data.len(), "Upload stored");
    Ok(relative)
}

async fn read_file_field(multipart: &mut Multipart) -> AppResult<(String, Bytes)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        return Ok((file_name, data));
    }
    Err(AppError::BadRequest(format!(
        "Missing required '{UPLOAD_FIELD}' field"
    )))
}

/// Turn the column update into the updated row, discarding the new file if
/// the row vanished or the update failed.
async fn attach<T>(
    state: &AppState,
    entity: &'static str,
    id: DbId,
    stored: &str,
    result: Result<Option<T>, sqlx::Error>,
) -> AppResult<T> {
    match result {
        Ok(Some(row)) => Ok(row),
        Ok(None) => {
            discard(state, Some(stored)).await;
            Err(AppError::Core(CoreError::NotFound { entity, id }))
        }
        Err(e) => {
            discard(state, Some(stored)).await;
            Err(e.into())
        }
    }
}

/// The previous file to remove after an upload, unless the new upload was
/// written to the same path (same name within the same millisecond).
fn replaced<'a>(previous: Option<&'a str>, stored: &str) -> Option<&'a str> {
    previous.filter(|p| *p != stored)
}

/// Best-effort removal of a stored file.
async fn discard(state: &AppState, relative: Option<&str>) {
    let Some(relative) = relative else {
        return;
    };
    let full = media_path(state, relative);
    match tokio::fs::remove_file(&full).await {
        Ok(()) => tracing::debug!(path = %relative, "Upload removed"),
        Err(e) => tracing::warn!(path = %relative, error = %e, "Failed to remove upload"),
    }
}

fn media_path(state: &AppState, relative: &str) -> PathBuf {
    state.config.media_root.join(relative)
}
