//! Sagas and the compositions (books, films) published within them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{Date, DbId, Timestamp};
use storyverse_core::validation::not_blank;
use validator::Validate;

// ---------------------------------------------------------------------------
// Saga
// ---------------------------------------------------------------------------

/// A row from the `sagas` table: a named storyline within a universe.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Saga {
    pub id: DbId,
    pub name: String,
    pub universe_id: Option<DbId>,
    pub zero_event_abbreviature: Option<String>,
    pub date_first_published: Option<Date>,
    pub country_first_published_id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub user_stamp_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSaga {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    pub universe_id: Option<DbId>,
    #[validate(length(max = 50))]
    pub zero_event_abbreviature: Option<String>,
    pub date_first_published: Option<Date>,
    pub country_first_published_id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub user_stamp_id: Option<DbId>,
}

pub type UpdateSaga = CreateSaga;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SagaListParams {
    pub q: Option<String>,
    pub universe_id: Option<DbId>,
    pub country_first_published_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// A row from the `compositions` table. Owned by its saga: deleting the
/// saga deletes the composition and everything the composition owns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Composition {
    pub id: DbId,
    pub saga_id: DbId,
    pub title: String,
    pub date_published: Option<Date>,
    pub composition_type_id: Option<DbId>,
    /// Path relative to the media root, set by the file upload endpoint.
    pub file_source: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComposition {
    pub saga_id: DbId,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    pub date_published: Option<Date>,
    pub composition_type_id: Option<DbId>,
}

pub type UpdateComposition = CreateComposition;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompositionListParams {
    pub q: Option<String>,
    pub composition_type_id: Option<DbId>,
    pub saga_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
