//! Repositories for `value_dimensions`, `fact_types`, `facts`,
//! `affects_on_values` and `fact_relations`.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::{delete_row, page};
use crate::models::fact::{
    AffectOnValue, AffectOnValueListParams, CreateAffectOnValue, CreateFact, CreateFactRelation,
    CreateFactType, CreateValueDimension, Fact, FactDetail, FactListParams, FactRelation,
    FactType, FactTypeListParams, UpdateAffectOnValue, UpdateFact, UpdateFactRelation,
    UpdateFactType, UpdateValueDimension, ValueDimension,
};
use crate::models::{PageParams, SearchParams};

// ---------------------------------------------------------------------------
// ValueDimension
// ---------------------------------------------------------------------------

const VALUE_DIMENSION_COLUMNS: &str =
    "id, title, description, utopia_picture, user_stamp_id, created_at, updated_at";

pub struct ValueDimensionRepo;

impl ValueDimensionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateValueDimension,
    ) -> Result<ValueDimension, sqlx::Error> {
        let query = format!(
            "INSERT INTO value_dimensions (title, description, utopia_picture, user_stamp_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {VALUE_DIMENSION_COLUMNS}"
        );
        sqlx::query_as::<_, ValueDimension>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.utopia_picture)
            .bind(input.user_stamp_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ValueDimension>, sqlx::Error> {
        let query = format!("SELECT {VALUE_DIMENSION_COLUMNS} FROM value_dimensions WHERE id = $1");
        sqlx::query_as::<_, ValueDimension>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &SearchParams,
    ) -> Result<Vec<ValueDimension>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {VALUE_DIMENSION_COLUMNS} FROM value_dimensions
             WHERE title ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ValueDimension>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateValueDimension,
    ) -> Result<Option<ValueDimension>, sqlx::Error> {
        let query = format!(
            "UPDATE value_dimensions SET
                title = $2,
                description = $3,
                utopia_picture = $4,
                user_stamp_id = $5
             WHERE id = $1
             RETURNING {VALUE_DIMENSION_COLUMNS}"
        );
        sqlx::query_as::<_, ValueDimension>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.utopia_picture)
            .bind(input.user_stamp_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dimension with the hero values and fact-type influences
    /// measured on it. Evaluations survive with the dimension cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "value_dimensions", id).await
    }
}

// ---------------------------------------------------------------------------
// FactType
// ---------------------------------------------------------------------------

const FACT_TYPE_COLUMNS: &str = "id, title, is_numerical, measure, created_at, updated_at";

pub struct FactTypeRepo;

impl FactTypeRepo {
    pub async fn create(pool: &PgPool, input: &CreateFactType) -> Result<FactType, sqlx::Error> {
        let query = format!(
            "INSERT INTO fact_types (title, is_numerical, measure)
             VALUES ($1, $2, $3)
             RETURNING {FACT_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, FactType>(&query)
            .bind(&input.title)
            .bind(input.is_numerical)
            .bind(&input.measure)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FactType>, sqlx::Error> {
        let query = format!("SELECT {FACT_TYPE_COLUMNS} FROM fact_types WHERE id = $1");
        sqlx::query_as::<_, FactType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &FactTypeListParams,
    ) -> Result<Vec<FactType>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {FACT_TYPE_COLUMNS} FROM fact_types
             WHERE title ILIKE ALL($1)
               AND ($2::BOOLEAN IS NULL OR is_numerical = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, FactType>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.is_numerical)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFactType,
    ) -> Result<Option<FactType>, sqlx::Error> {
        let query = format!(
            "UPDATE fact_types SET title = $2, is_numerical = $3, measure = $4
             WHERE id = $1
             RETURNING {FACT_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, FactType>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.is_numerical)
            .bind(&input.measure)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "fact_types", id).await
    }
}

// ---------------------------------------------------------------------------
// Fact
// ---------------------------------------------------------------------------

const FACT_COLUMNS: &str = "id, composition_id, title, description, fact_type_id, numeric_value, \
     condition_for_effect, result_of_event_id, created_at, updated_at";

pub struct FactRepo;

impl FactRepo {
    pub async fn create(pool: &PgPool, input: &CreateFact) -> Result<Fact, sqlx::Error> {
        let query = format!(
            "INSERT INTO facts (composition_id, title, description, fact_type_id, numeric_value,
                                condition_for_effect, result_of_event_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {FACT_COLUMNS}"
        );
        sqlx::query_as::<_, Fact>(&query)
            .bind(input.composition_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.fact_type_id)
            .bind(input.numeric_value)
            .bind(&input.condition_for_effect)
            .bind(input.result_of_event_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fact>, sqlx::Error> {
        let query = format!("SELECT {FACT_COLUMNS} FROM facts WHERE id = $1");
        sqlx::query_as::<_, Fact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a fact with the relations it is the base of.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<FactDetail>, sqlx::Error> {
        let Some(fact) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let relations = FactRelationRepo::list_by_based_fact(pool, id).await?;
        Ok(Some(FactDetail { fact, relations }))
    }

    pub async fn list(pool: &PgPool, params: &FactListParams) -> Result<Vec<Fact>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {FACT_COLUMNS} FROM facts
             WHERE title ILIKE ALL($1)
               AND ($2::BIGINT IS NULL OR fact_type_id = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Fact>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.fact_type_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFact,
    ) -> Result<Option<Fact>, sqlx::Error> {
        let query = format!(
            "UPDATE facts SET
                composition_id = $2,
                title = $3,
                description = $4,
                fact_type_id = $5,
                numeric_value = $6,
                condition_for_effect = $7,
                result_of_event_id = $8
             WHERE id = $1
             RETURNING {FACT_COLUMNS}"
        );
        sqlx::query_as::<_, Fact>(&query)
            .bind(id)
            .bind(input.composition_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.fact_type_id)
            .bind(input.numeric_value)
            .bind(&input.condition_for_effect)
            .bind(input.result_of_event_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a fact with every relation it takes part in, on either side.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "facts", id).await
    }
}

// ---------------------------------------------------------------------------
// AffectOnValue
// ---------------------------------------------------------------------------

const AFFECT_ON_VALUE_COLUMNS: &str =
    "id, value_dimension_id, fact_type_id, weight, created_at, updated_at";

pub struct AffectOnValueRepo;

impl AffectOnValueRepo {
    /// Insert an influence. A second row for the same (dimension, fact type)
    /// violates `uq_affects_on_values_pair`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAffectOnValue,
    ) -> Result<AffectOnValue, sqlx::Error> {
        let query = format!(
            "INSERT INTO affects_on_values (value_dimension_id, fact_type_id, weight)
             VALUES ($1, $2, $3)
             RETURNING {AFFECT_ON_VALUE_COLUMNS}"
        );
        sqlx::query_as::<_, AffectOnValue>(&query)
            .bind(input.value_dimension_id)
            .bind(input.fact_type_id)
            .bind(input.weight)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AffectOnValue>, sqlx::Error> {
        let query =
            format!("SELECT {AFFECT_ON_VALUE_COLUMNS} FROM affects_on_values WHERE id = $1");
        sqlx::query_as::<_, AffectOnValue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &AffectOnValueListParams,
    ) -> Result<Vec<AffectOnValue>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {AFFECT_ON_VALUE_COLUMNS} FROM affects_on_values
             WHERE ($1::BIGINT IS NULL OR value_dimension_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, AffectOnValue>(&query)
            .bind(params.value_dimension_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAffectOnValue,
    ) -> Result<Option<AffectOnValue>, sqlx::Error> {
        let query = format!(
            "UPDATE affects_on_values SET value_dimension_id = $2, fact_type_id = $3, weight = $4
             WHERE id = $1
             RETURNING {AFFECT_ON_VALUE_COLUMNS}"
        );
        sqlx::query_as::<_, AffectOnValue>(&query)
            .bind(id)
            .bind(input.value_dimension_id)
            .bind(input.fact_type_id)
            .bind(input.weight)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "affects_on_values", id).await
    }
}

// ---------------------------------------------------------------------------
// FactRelation
// ---------------------------------------------------------------------------

const FACT_RELATION_COLUMNS: &str =
    "id, based_fact_id, followed_fact_id, group_id, event_relation_id, created_at, updated_at";

pub struct FactRelationRepo;

impl FactRelationRepo {
    /// Insert a dependency edge. A duplicate (based, followed) pair violates
    /// `uq_fact_relations_pair`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFactRelation,
    ) -> Result<FactRelation, sqlx::Error> {
        let query = format!(
            "INSERT INTO fact_relations (based_fact_id, followed_fact_id, group_id,
                                         event_relation_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {FACT_RELATION_COLUMNS}"
        );
        sqlx::query_as::<_, FactRelation>(&query)
            .bind(input.based_fact_id)
            .bind(input.followed_fact_id)
            .bind(&input.group_id)
            .bind(input.event_relation_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FactRelation>, sqlx::Error> {
        let query = format!("SELECT {FACT_RELATION_COLUMNS} FROM fact_relations WHERE id = $1");
        sqlx::query_as::<_, FactRelation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &PageParams,
    ) -> Result<Vec<FactRelation>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {FACT_RELATION_COLUMNS} FROM fact_relations ORDER BY id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, FactRelation>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Relations whose base is the given fact.
    pub async fn list_by_based_fact(
        pool: &PgPool,
        based_fact_id: DbId,
    ) -> Result<Vec<FactRelation>, sqlx::Error> {
        let query = format!(
            "SELECT {FACT_RELATION_COLUMNS} FROM fact_relations
             WHERE based_fact_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, FactRelation>(&query)
            .bind(based_fact_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFactRelation,
    ) -> Result<Option<FactRelation>, sqlx::Error> {
        let query = format!(
            "UPDATE fact_relations SET
                based_fact_id = $2,
                followed_fact_id = $3,
                group_id = $4,
                event_relation_id = $5
             WHERE id = $1
             RETURNING {FACT_RELATION_COLUMNS}"
        );
        sqlx::query_as::<_, FactRelation>(&query)
            .bind(id)
            .bind(input.based_fact_id)
            .bind(input.followed_fact_id)
            .bind(&input.group_id)
            .bind(input.event_relation_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "fact_relations", id).await
    }
}
