//! Reference tables: universes, countries, stamp statuses, composition
//! types and role types. All are searched by their name or title only.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{DbId, Timestamp};
use storyverse_core::validation::not_blank;
use validator::Validate;

// ---------------------------------------------------------------------------
// Universe
// ---------------------------------------------------------------------------

/// A row from the `universes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Universe {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUniverse {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
}

pub type UpdateUniverse = CreateUniverse;

// ---------------------------------------------------------------------------
// Country
// ---------------------------------------------------------------------------

/// A row from the `countries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCountry {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
}

pub type UpdateCountry = CreateCountry;

// ---------------------------------------------------------------------------
// StampStatus
// ---------------------------------------------------------------------------

/// A row from the `stamp_statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StampStatus {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStampStatus {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

pub type UpdateStampStatus = CreateStampStatus;

// ---------------------------------------------------------------------------
// CompositionType
// ---------------------------------------------------------------------------

/// A row from the `composition_types` table (book, film, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompositionType {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompositionType {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

pub type UpdateCompositionType = CreateCompositionType;

// ---------------------------------------------------------------------------
// RoleType
// ---------------------------------------------------------------------------

/// A row from the `role_types` table: the part a hero plays in an episode.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoleType {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoleType {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

pub type UpdateRoleType = CreateRoleType;
