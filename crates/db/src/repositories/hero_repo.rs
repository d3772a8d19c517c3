//! Repositories for `heroes` and `hero_values`.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::decision_repo::{DecisionRepo, HeroActionRepo};
use super::{delete_row, page};
use crate::models::hero::{
    CreateHero, CreateHeroValue, Hero, HeroDetail, HeroListParams, HeroValue, UpdateHero,
    UpdateHeroValue,
};
use crate::models::PageParams;

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

const HERO_COLUMNS: &str = "id, name, description, photo_file, saga_id, birth_event_id, \
     user_stamp_id, gla_id, created_at, updated_at";

pub struct HeroRepo;

impl HeroRepo {
    pub async fn create(pool: &PgPool, input: &CreateHero) -> Result<Hero, sqlx::Error> {
        let query = format!(
            "INSERT INTO heroes (name, description, saga_id, birth_event_id, user_stamp_id, gla_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {HERO_COLUMNS}"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.saga_id)
            .bind(input.birth_event_id)
            .bind(input.user_stamp_id)
            .bind(input.gla_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!("SELECT {HERO_COLUMNS} FROM heroes WHERE id = $1");
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a hero with its values, actions and decisions.
    ///
    /// Returns `None` if the hero does not exist.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<HeroDetail>, sqlx::Error> {
        let Some(hero) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let values = HeroValueRepo::list_by_hero(pool, id).await?;
        let actions = HeroActionRepo::list_by_hero(pool, id).await?;
        let decisions = DecisionRepo::list_by_hero(pool, id).await?;
        Ok(Some(HeroDetail {
            hero,
            values,
            actions,
            decisions,
        }))
    }

    pub async fn list(pool: &PgPool, params: &HeroListParams) -> Result<Vec<Hero>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {HERO_COLUMNS} FROM heroes
             WHERE name ILIKE ALL($1)
               AND ($2::BIGINT IS NULL OR saga_id = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.saga_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace the editable columns. `photo_file` is left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHero,
    ) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!(
            "UPDATE heroes SET
                name = $2,
                description = $3,
                saga_id = $4,
                birth_event_id = $5,
                user_stamp_id = $6,
                gla_id = $7
             WHERE id = $1
             RETURNING {HERO_COLUMNS}"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.saga_id)
            .bind(input.birth_event_id)
            .bind(input.user_stamp_id)
            .bind(input.gla_id)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the stored photo path.
    pub async fn set_photo(
        pool: &PgPool,
        id: DbId,
        photo_file: Option<&str>,
    ) -> Result<Option<Hero>, sqlx::Error> {
        let query =
            format!("UPDATE heroes SET photo_file = $2 WHERE id = $1 RETURNING {HERO_COLUMNS}");
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .bind(photo_file)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hero with its participations, values, decisions, actions
    /// and evaluations.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "heroes", id).await
    }
}

// ---------------------------------------------------------------------------
// HeroValue
// ---------------------------------------------------------------------------

const HERO_VALUE_COLUMNS: &str =
    "id, hero_id, value_dimension_id, weight, event_after_id, created_at, updated_at";

pub struct HeroValueRepo;

impl HeroValueRepo {
    pub async fn create(pool: &PgPool, input: &CreateHeroValue) -> Result<HeroValue, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_values (hero_id, value_dimension_id, weight, event_after_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {HERO_VALUE_COLUMNS}"
        );
        sqlx::query_as::<_, HeroValue>(&query)
            .bind(input.hero_id)
            .bind(input.value_dimension_id)
            .bind(input.weight)
            .bind(input.event_after_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroValue>, sqlx::Error> {
        let query = format!("SELECT {HERO_VALUE_COLUMNS} FROM hero_values WHERE id = $1");
        sqlx::query_as::<_, HeroValue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &PageParams) -> Result<Vec<HeroValue>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {HERO_VALUE_COLUMNS} FROM hero_values
             ORDER BY id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, HeroValue>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All values held by one hero, in insertion order.
    pub async fn list_by_hero(pool: &PgPool, hero_id: DbId) -> Result<Vec<HeroValue>, sqlx::Error> {
        let query = format!(
            "SELECT {HERO_VALUE_COLUMNS} FROM hero_values
             WHERE hero_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, HeroValue>(&query)
            .bind(hero_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroValue,
    ) -> Result<Option<HeroValue>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_values SET
                hero_id = $2,
                value_dimension_id = $3,
                weight = $4,
                event_after_id = $5
             WHERE id = $1
             RETURNING {HERO_VALUE_COLUMNS}"
        );
        sqlx::query_as::<_, HeroValue>(&query)
            .bind(id)
            .bind(input.hero_id)
            .bind(input.value_dimension_id)
            .bind(input.weight)
            .bind(input.event_after_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "hero_values", id).await
    }
}
