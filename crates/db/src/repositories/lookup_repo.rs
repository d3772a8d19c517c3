//! Repositories for the reference tables: `universes`, `countries`,
//! `stamp_statuses`, `composition_types` and `role_types`.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::{delete_row, page};
use crate::models::lookup::{
    CompositionType, Country, CreateCompositionType, CreateCountry, CreateRoleType,
    CreateStampStatus, CreateUniverse, RoleType, StampStatus, UpdateCompositionType,
    UpdateCountry, UpdateRoleType, UpdateStampStatus, UpdateUniverse, Universe,
};
use crate::models::SearchParams;

// ---------------------------------------------------------------------------
// Universe
// ---------------------------------------------------------------------------

const UNIVERSE_COLUMNS: &str = "id, name, created_at, updated_at";

pub struct UniverseRepo;

impl UniverseRepo {
    pub async fn create(pool: &PgPool, input: &CreateUniverse) -> Result<Universe, sqlx::Error> {
        let query = format!("INSERT INTO universes (name) VALUES ($1) RETURNING {UNIVERSE_COLUMNS}");
        sqlx::query_as::<_, Universe>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Universe>, sqlx::Error> {
        let query = format!("SELECT {UNIVERSE_COLUMNS} FROM universes WHERE id = $1");
        sqlx::query_as::<_, Universe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List universes whose name contains every search word.
    pub async fn list(pool: &PgPool, params: &SearchParams) -> Result<Vec<Universe>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {UNIVERSE_COLUMNS} FROM universes
             WHERE name ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Universe>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUniverse,
    ) -> Result<Option<Universe>, sqlx::Error> {
        let query =
            format!("UPDATE universes SET name = $2 WHERE id = $1 RETURNING {UNIVERSE_COLUMNS}");
        sqlx::query_as::<_, Universe>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a universe. Its sagas keep existing with `universe_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "universes", id).await
    }
}

// ---------------------------------------------------------------------------
// Country
// ---------------------------------------------------------------------------

const COUNTRY_COLUMNS: &str = "id, name, created_at, updated_at";

pub struct CountryRepo;

impl CountryRepo {
    pub async fn create(pool: &PgPool, input: &CreateCountry) -> Result<Country, sqlx::Error> {
        let query = format!("INSERT INTO countries (name) VALUES ($1) RETURNING {COUNTRY_COLUMNS}");
        sqlx::query_as::<_, Country>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("SELECT {COUNTRY_COLUMNS} FROM countries WHERE id = $1");
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &SearchParams) -> Result<Vec<Country>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {COUNTRY_COLUMNS} FROM countries
             WHERE name ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCountry,
    ) -> Result<Option<Country>, sqlx::Error> {
        let query =
            format!("UPDATE countries SET name = $2 WHERE id = $1 RETURNING {COUNTRY_COLUMNS}");
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "countries", id).await
    }
}

// ---------------------------------------------------------------------------
// StampStatus
// ---------------------------------------------------------------------------

const STAMP_STATUS_COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct StampStatusRepo;

impl StampStatusRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateStampStatus,
    ) -> Result<StampStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO stamp_statuses (name, description) VALUES ($1, $2)
             RETURNING {STAMP_STATUS_COLUMNS}"
        );
        sqlx::query_as::<_, StampStatus>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StampStatus>, sqlx::Error> {
        let query = format!("SELECT {STAMP_STATUS_COLUMNS} FROM stamp_statuses WHERE id = $1");
        sqlx::query_as::<_, StampStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &SearchParams,
    ) -> Result<Vec<StampStatus>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {STAMP_STATUS_COLUMNS} FROM stamp_statuses
             WHERE name ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, StampStatus>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStampStatus,
    ) -> Result<Option<StampStatus>, sqlx::Error> {
        let query = format!(
            "UPDATE stamp_statuses SET name = $2, description = $3
             WHERE id = $1
             RETURNING {STAMP_STATUS_COLUMNS}"
        );
        sqlx::query_as::<_, StampStatus>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "stamp_statuses", id).await
    }
}

// ---------------------------------------------------------------------------
// CompositionType
// ---------------------------------------------------------------------------

const COMPOSITION_TYPE_COLUMNS: &str = "id, title, description, created_at, updated_at";

pub struct CompositionTypeRepo;

impl CompositionTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCompositionType,
    ) -> Result<CompositionType, sqlx::Error> {
        let query = format!(
            "INSERT INTO composition_types (title, description) VALUES ($1, $2)
             RETURNING {COMPOSITION_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, CompositionType>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CompositionType>, sqlx::Error> {
        let query =
            format!("SELECT {COMPOSITION_TYPE_COLUMNS} FROM composition_types WHERE id = $1");
        sqlx::query_as::<_, CompositionType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &SearchParams,
    ) -> Result<Vec<CompositionType>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {COMPOSITION_TYPE_COLUMNS} FROM composition_types
             WHERE title ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CompositionType>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompositionType,
    ) -> Result<Option<CompositionType>, sqlx::Error> {
        let query = format!(
            "UPDATE composition_types SET title = $2, description = $3
             WHERE id = $1
             RETURNING {COMPOSITION_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, CompositionType>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "composition_types", id).await
    }
}

// ---------------------------------------------------------------------------
// RoleType
// ---------------------------------------------------------------------------

const ROLE_TYPE_COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct RoleTypeRepo;

impl RoleTypeRepo {
    pub async fn create(pool: &PgPool, input: &CreateRoleType) -> Result<RoleType, sqlx::Error> {
        let query = format!(
            "INSERT INTO role_types (name, description) VALUES ($1, $2)
             RETURNING {ROLE_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, RoleType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RoleType>, sqlx::Error> {
        let query = format!("SELECT {ROLE_TYPE_COLUMNS} FROM role_types WHERE id = $1");
        sqlx::query_as::<_, RoleType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &SearchParams) -> Result<Vec<RoleType>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {ROLE_TYPE_COLUMNS} FROM role_types
             WHERE name ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, RoleType>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoleType,
    ) -> Result<Option<RoleType>, sqlx::Error> {
        let query = format!(
            "UPDATE role_types SET name = $2, description = $3
             WHERE id = $1
             RETURNING {ROLE_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, RoleType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a role type. Participations keep existing with the role cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "role_types", id).await
    }
}
