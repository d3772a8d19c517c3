//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lists are ordered by `id`
//! and paginated; searches bind the word patterns from
//! [`storyverse_core::search::search_patterns`] as a `TEXT[]`.

pub mod account_repo;
pub mod decision_repo;
pub mod deletion_repo;
pub mod episode_repo;
pub mod fact_repo;
pub mod hero_repo;
pub mod lookup_repo;
pub mod person_repo;
pub mod place_repo;
pub mod saga_repo;

pub use account_repo::AccountRepo;
pub use decision_repo::{
    ActionTypeRepo, DecisionEvaluationRepo, DecisionRepo, DecisionTypeRepo, HeroActionRepo,
};
pub use deletion_repo::DeletionRepo;
pub use episode_repo::{EpisodeRepo, ParticipationRepo};
pub use fact_repo::{
    AffectOnValueRepo, FactRelationRepo, FactRepo, FactTypeRepo, ValueDimensionRepo,
};
pub use hero_repo::{HeroRepo, HeroValueRepo};
pub use lookup_repo::{CompositionTypeRepo, CountryRepo, RoleTypeRepo, StampStatusRepo, UniverseRepo};
pub use person_repo::{AuthorRepo, GlobalActorRepo, UserRepo, UserStampRepo};
pub use place_repo::{EventRepo, EventSequenceRepo, PlaceRepo};
pub use saga_repo::{CompositionRepo, SagaRepo};

use sqlx::PgPool;
use storyverse_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use storyverse_core::types::DbId;

/// Resolve optional `limit`/`offset` query values to bound parameters.
pub(crate) fn page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (
        clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        clamp_offset(offset),
    )
}

/// Hard-delete one row by id. The database applies the referential actions.
///
/// `table` always comes from a repository constant, never from input.
pub(crate) async fn delete_row(
    pool: &PgPool,
    table: &'static str,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {table} WHERE id = $1");
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    let deleted = result.rows_affected() > 0;
    if deleted {
        tracing::info!(table, id, "Row deleted");
    }
    Ok(deleted)
}
