//! Episodes and the heroes participating in them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{DbId, Timestamp};
use storyverse_core::validation::not_blank;
use validator::Validate;

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

/// A row from the `episodes` table. Owned by its composition. Episodes chain
/// through `previous_episode_id`; chains are not checked for cycles.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub composition_id: DbId,
    pub title: String,
    pub story_resume: String,
    pub start_event_id: Option<DbId>,
    pub previous_episode_id: Option<DbId>,
    pub user_stamp_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEpisode {
    pub composition_id: DbId,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub story_resume: String,
    pub start_event_id: Option<DbId>,
    pub previous_episode_id: Option<DbId>,
    pub user_stamp_id: Option<DbId>,
}

pub type UpdateEpisode = CreateEpisode;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpisodeListParams {
    pub q: Option<String>,
    pub composition_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// An episode together with its participations.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeDetail {
    #[serde(flatten)]
    pub episode: Episode,
    pub participations: Vec<Participation>,
}

// ---------------------------------------------------------------------------
// Participation
// ---------------------------------------------------------------------------

/// A row from the `participations` table: a hero appearing in an episode,
/// optionally in a named role. Deleting either side deletes the row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participation {
    pub id: DbId,
    pub hero_id: DbId,
    pub episode_id: DbId,
    pub role_type_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateParticipation {
    pub hero_id: DbId,
    /// Required. The nested create endpoint fills it from the path.
    pub episode_id: Option<DbId>,
    pub role_type_id: Option<DbId>,
}

pub type UpdateParticipation = CreateParticipation;
