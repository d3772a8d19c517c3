//! Delete previews backing every resource's `/{id}/delete-preview` route.

use axum::Json;
use storyverse_core::error::CoreError;
use storyverse_core::schema;
use storyverse_core::types::DbId;
use storyverse_db::models::deletion::DeletePreview;
use storyverse_db::repositories::DeletionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Report what deleting `table`/`id` would remove or clear.
pub async fn preview(
    state: &AppState,
    table: &'static str,
    id: DbId,
) -> AppResult<Json<DataResponse<DeletePreview>>> {
    let entity = schema::table(table).map_or(table, |t| t.entity);
    let preview = DeletionRepo::preview(&state.pool, table, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity, id }))?;
    Ok(Json(DataResponse { data: preview }))
}
