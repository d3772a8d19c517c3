//! Places, events and the event-ordering graph.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{DbId, Timestamp};
use storyverse_core::validation::{not_blank, url_or_blank};
use validator::Validate;

// ---------------------------------------------------------------------------
// Place
// ---------------------------------------------------------------------------

/// A row from the `places` table. Places nest through `parent_id`; chains
/// may be arbitrarily deep and are not checked for cycles.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub description: String,
    pub wiki_link: String,
    pub real_flag: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlace {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    pub parent_id: Option<DbId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "url_or_blank"))]
    pub wiki_link: String,
    #[serde(default)]
    pub real_flag: bool,
}

pub type UpdatePlace = CreatePlace;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceListParams {
    pub q: Option<String>,
    pub real_flag: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub place_id: Option<DbId>,
    pub description: String,
    /// Marks the saga's reference point for relative dating.
    pub zero_event_flag: bool,
    pub date_time_from_zero_event: Option<String>,
    pub composition_id: Option<DbId>,
    /// Free-form position inside the composition (chapter, timecode).
    pub cm_position: Option<String>,
    pub user_stamp_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEvent {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    pub place_id: Option<DbId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub zero_event_flag: bool,
    #[validate(length(max = 255))]
    pub date_time_from_zero_event: Option<String>,
    pub composition_id: Option<DbId>,
    #[validate(length(max = 255))]
    pub cm_position: Option<String>,
    pub user_stamp_id: Option<DbId>,
}

pub type UpdateEvent = CreateEvent;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListParams {
    pub q: Option<String>,
    pub zero_event_flag: Option<bool>,
    pub place_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// EventSequence
// ---------------------------------------------------------------------------

/// A row from the `event_sequences` table: `event_before` precedes
/// `event_after`. At most one edge per ordered pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventSequence {
    pub id: DbId,
    pub event_before_id: DbId,
    pub event_after_id: DbId,
    /// `true` when nothing happens between the two events.
    pub straight: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventSequence {
    pub event_before_id: DbId,
    pub event_after_id: DbId,
    #[serde(default)]
    pub straight: bool,
}

pub type UpdateEventSequence = CreateEventSequence;
