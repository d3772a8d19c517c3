//! Heroes and the values they hold.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{DbId, Timestamp};
use storyverse_core::validation::not_blank;
use validator::Validate;

use crate::models::decision::{Decision, HeroAction};

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// A row from the `heroes` table. Every reference is optional: a hero may
/// exist before it is attached to a saga, a birth event or a global actor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hero {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Path relative to the media root, set by the photo upload endpoint.
    pub photo_file: Option<String>,
    pub saga_id: Option<DbId>,
    pub birth_event_id: Option<DbId>,
    pub user_stamp_id: Option<DbId>,
    pub gla_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHero {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub saga_id: Option<DbId>,
    pub birth_event_id: Option<DbId>,
    pub user_stamp_id: Option<DbId>,
    pub gla_id: Option<DbId>,
}

pub type UpdateHero = CreateHero;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroListParams {
    pub q: Option<String>,
    pub saga_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A hero together with the collections edited inline on its admin page.
#[derive(Debug, Clone, Serialize)]
pub struct HeroDetail {
    #[serde(flatten)]
    pub hero: Hero,
    pub values: Vec<HeroValue>,
    pub actions: Vec<HeroAction>,
    pub decisions: Vec<Decision>,
}

// ---------------------------------------------------------------------------
// HeroValue
// ---------------------------------------------------------------------------

/// A row from the `hero_values` table: how strongly a hero holds a value,
/// optionally from a given event onwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroValue {
    pub id: DbId,
    pub hero_id: DbId,
    pub value_dimension_id: DbId,
    pub weight: f64,
    pub event_after_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroValue {
    /// Required. The nested create endpoint fills it from the path.
    pub hero_id: Option<DbId>,
    pub value_dimension_id: DbId,
    pub weight: f64,
    pub event_after_id: Option<DbId>,
}

pub type UpdateHeroValue = CreateHeroValue;
