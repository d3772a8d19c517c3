//! Repositories for `sagas` and `compositions`.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::{delete_row, page};
use crate::models::saga::{
    Composition, CompositionListParams, CreateComposition, CreateSaga, Saga, SagaListParams,
    UpdateComposition, UpdateSaga,
};

// ---------------------------------------------------------------------------
// Saga
// ---------------------------------------------------------------------------

const SAGA_COLUMNS: &str = "id, name, universe_id, zero_event_abbreviature, date_first_published, \
     country_first_published_id, author_id, user_stamp_id, created_at, updated_at";

pub struct SagaRepo;

impl SagaRepo {
    pub async fn create(pool: &PgPool, input: &CreateSaga) -> Result<Saga, sqlx::Error> {
        let query = format!(
            "INSERT INTO sagas (name, universe_id, zero_event_abbreviature, date_first_published,
                                country_first_published_id, author_id, user_stamp_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {SAGA_COLUMNS}"
        );
        sqlx::query_as::<_, Saga>(&query)
            .bind(&input.name)
            .bind(input.universe_id)
            .bind(&input.zero_event_abbreviature)
            .bind(input.date_first_published)
            .bind(input.country_first_published_id)
            .bind(input.author_id)
            .bind(input.user_stamp_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Saga>, sqlx::Error> {
        let query = format!("SELECT {SAGA_COLUMNS} FROM sagas WHERE id = $1");
        sqlx::query_as::<_, Saga>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &SagaListParams) -> Result<Vec<Saga>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {SAGA_COLUMNS} FROM sagas
             WHERE name ILIKE ALL($1)
               AND ($2::BIGINT IS NULL OR universe_id = $2)
               AND ($3::BIGINT IS NULL OR country_first_published_id = $3)
             ORDER BY id
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Saga>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.universe_id)
            .bind(params.country_first_published_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSaga,
    ) -> Result<Option<Saga>, sqlx::Error> {
        let query = format!(
            "UPDATE sagas SET
                name = $2,
                universe_id = $3,
                zero_event_abbreviature = $4,
                date_first_published = $5,
                country_first_published_id = $6,
                author_id = $7,
                user_stamp_id = $8
             WHERE id = $1
             RETURNING {SAGA_COLUMNS}"
        );
        sqlx::query_as::<_, Saga>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.universe_id)
            .bind(&input.zero_event_abbreviature)
            .bind(input.date_first_published)
            .bind(input.country_first_published_id)
            .bind(input.author_id)
            .bind(input.user_stamp_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a saga with its compositions and everything they own.
    /// Heroes of the saga survive with `saga_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "sagas", id).await
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

const COMPOSITION_COLUMNS: &str = "id, saga_id, title, date_published, composition_type_id, \
     file_source, created_at, updated_at";

pub struct CompositionRepo;

impl CompositionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateComposition,
    ) -> Result<Composition, sqlx::Error> {
        let query = format!(
            "INSERT INTO compositions (saga_id, title, date_published, composition_type_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COMPOSITION_COLUMNS}"
        );
        sqlx::query_as::<_, Composition>(&query)
            .bind(input.saga_id)
            .bind(&input.title)
            .bind(input.date_published)
            .bind(input.composition_type_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Composition>, sqlx::Error> {
        let query = format!("SELECT {COMPOSITION_COLUMNS} FROM compositions WHERE id = $1");
        sqlx::query_as::<_, Composition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &CompositionListParams,
    ) -> Result<Vec<Composition>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {COMPOSITION_COLUMNS} FROM compositions
             WHERE title ILIKE ALL($1)
               AND ($2::BIGINT IS NULL OR composition_type_id = $2)
               AND ($3::BIGINT IS NULL OR saga_id = $3)
             ORDER BY id
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Composition>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.composition_type_id)
            .bind(params.saga_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace the editable columns. `file_source` is left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComposition,
    ) -> Result<Option<Composition>, sqlx::Error> {
        let query = format!(
            "UPDATE compositions SET
                saga_id = $2,
                title = $3,
                date_published = $4,
                composition_type_id = $5
             WHERE id = $1
             RETURNING {COMPOSITION_COLUMNS}"
        );
        sqlx::query_as::<_, Composition>(&query)
            .bind(id)
            .bind(input.saga_id)
            .bind(&input.title)
            .bind(input.date_published)
            .bind(input.composition_type_id)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the stored source file path.
    pub async fn set_file_source(
        pool: &PgPool,
        id: DbId,
        file_source: Option<&str>,
    ) -> Result<Option<Composition>, sqlx::Error> {
        let query = format!(
            "UPDATE compositions SET file_source = $2 WHERE id = $1 RETURNING {COMPOSITION_COLUMNS}"
        );
        sqlx::query_as::<_, Composition>(&query)
            .bind(id)
            .bind(file_source)
            .fetch_optional(pool)
            .await
    }

    /// Delete a composition with its episodes and facts.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "compositions", id).await
    }
}
