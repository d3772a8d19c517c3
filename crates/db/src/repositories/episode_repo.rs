//! Repositories for `episodes` and `participations`.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::{delete_row, page};
use crate::models::episode::{
    CreateEpisode, CreateParticipation, Episode, EpisodeDetail, EpisodeListParams, Participation,
    UpdateEpisode, UpdateParticipation,
};
use crate::models::SearchParams;

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

const EPISODE_COLUMNS: &str = "id, composition_id, title, story_resume, start_event_id, \
     previous_episode_id, user_stamp_id, created_at, updated_at";

pub struct EpisodeRepo;

impl EpisodeRepo {
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes (composition_id, title, story_resume, start_event_id,
                                   previous_episode_id, user_stamp_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {EPISODE_COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(input.composition_id)
            .bind(&input.title)
            .bind(&input.story_resume)
            .bind(input.start_event_id)
            .bind(input.previous_episode_id)
            .bind(input.user_stamp_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {EPISODE_COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load an episode with its participations.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EpisodeDetail>, sqlx::Error> {
        let Some(episode) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let participations = ParticipationRepo::list_by_episode(pool, id).await?;
        Ok(Some(EpisodeDetail {
            episode,
            participations,
        }))
    }

    pub async fn list(
        pool: &PgPool,
        params: &EpisodeListParams,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {EPISODE_COLUMNS} FROM episodes
             WHERE title ILIKE ALL($1)
               AND ($2::BIGINT IS NULL OR composition_id = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.composition_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET
                composition_id = $2,
                title = $3,
                story_resume = $4,
                start_event_id = $5,
                previous_episode_id = $6,
                user_stamp_id = $7
             WHERE id = $1
             RETURNING {EPISODE_COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(input.composition_id)
            .bind(&input.title)
            .bind(&input.story_resume)
            .bind(input.start_event_id)
            .bind(input.previous_episode_id)
            .bind(input.user_stamp_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an episode with its participations. Following episodes keep
    /// existing with `previous_episode_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "episodes", id).await
    }
}

// ---------------------------------------------------------------------------
// Participation
// ---------------------------------------------------------------------------

const PARTICIPATION_COLUMNS: &str =
    "id, hero_id, episode_id, role_type_id, created_at, updated_at";

pub struct ParticipationRepo;

impl ParticipationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateParticipation,
    ) -> Result<Participation, sqlx::Error> {
        let query = format!(
            "INSERT INTO participations (hero_id, episode_id, role_type_id)
             VALUES ($1, $2, $3)
             RETURNING {PARTICIPATION_COLUMNS}"
        );
        sqlx::query_as::<_, Participation>(&query)
            .bind(input.hero_id)
            .bind(input.episode_id)
            .bind(input.role_type_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Participation>, sqlx::Error> {
        let query = format!("SELECT {PARTICIPATION_COLUMNS} FROM participations WHERE id = $1");
        sqlx::query_as::<_, Participation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List participations. Every search word must match either the hero
    /// name or the episode title.
    pub async fn list(
        pool: &PgPool,
        params: &SearchParams,
    ) -> Result<Vec<Participation>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {PARTICIPATION_COLUMNS} FROM participations p
             WHERE NOT EXISTS (
                 SELECT 1 FROM UNNEST($1::TEXT[]) AS w(pattern)
                 WHERE NOT EXISTS (
                     SELECT 1 FROM heroes h WHERE h.id = p.hero_id AND h.name ILIKE w.pattern
                 )
                 AND NOT EXISTS (
                     SELECT 1 FROM episodes e WHERE e.id = p.episode_id AND e.title ILIKE w.pattern
                 )
             )
             ORDER BY p.id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Participation>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_episode(
        pool: &PgPool,
        episode_id: DbId,
    ) -> Result<Vec<Participation>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPATION_COLUMNS} FROM participations WHERE episode_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, Participation>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateParticipation,
    ) -> Result<Option<Participation>, sqlx::Error> {
        let query = format!(
            "UPDATE participations SET hero_id = $2, episode_id = $3, role_type_id = $4
             WHERE id = $1
             RETURNING {PARTICIPATION_COLUMNS}"
        );
        sqlx::query_as::<_, Participation>(&query)
            .bind(id)
            .bind(input.hero_id)
            .bind(input.episode_id)
            .bind(input.role_type_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a participation. Actions taken in this role keep existing
    /// with `in_role_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "participations", id).await
    }
}
