//! Repositories for `places`, `events` and `event_sequences`.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::{delete_row, page};
use crate::models::place::{
    CreateEvent, CreateEventSequence, CreatePlace, Event, EventListParams, EventSequence, Place,
    PlaceListParams, UpdateEvent, UpdateEventSequence, UpdatePlace,
};
use crate::models::PageParams;

// ---------------------------------------------------------------------------
// Place
// ---------------------------------------------------------------------------

const PLACE_COLUMNS: &str =
    "id, name, parent_id, description, wiki_link, real_flag, created_at, updated_at";

pub struct PlaceRepo;

impl PlaceRepo {
    pub async fn create(pool: &PgPool, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (name, parent_id, description, wiki_link, real_flag)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PLACE_COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&input.name)
            .bind(input.parent_id)
            .bind(&input.description)
            .bind(&input.wiki_link)
            .bind(input.real_flag)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {PLACE_COLUMNS} FROM places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &PlaceListParams) -> Result<Vec<Place>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {PLACE_COLUMNS} FROM places
             WHERE name ILIKE ALL($1)
               AND ($2::BOOLEAN IS NULL OR real_flag = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.real_flag)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlace,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET
                name = $2,
                parent_id = $3,
                description = $4,
                wiki_link = $5,
                real_flag = $6
             WHERE id = $1
             RETURNING {PLACE_COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.parent_id)
            .bind(&input.description)
            .bind(&input.wiki_link)
            .bind(input.real_flag)
            .fetch_optional(pool)
            .await
    }

    /// Delete a place. Child places and events located there survive with
    /// the reference cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "places", id).await
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

const EVENT_COLUMNS: &str = "id, title, place_id, description, zero_event_flag, \
     date_time_from_zero_event, composition_id, cm_position, user_stamp_id, created_at, updated_at";

pub struct EventRepo;

impl EventRepo {
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, place_id, description, zero_event_flag,
                                 date_time_from_zero_event, composition_id, cm_position,
                                 user_stamp_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(input.place_id)
            .bind(&input.description)
            .bind(input.zero_event_flag)
            .bind(&input.date_time_from_zero_event)
            .bind(input.composition_id)
            .bind(&input.cm_position)
            .bind(input.user_stamp_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &EventListParams) -> Result<Vec<Event>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE title ILIKE ALL($1)
               AND ($2::BOOLEAN IS NULL OR zero_event_flag = $2)
               AND ($3::BIGINT IS NULL OR place_id = $3)
             ORDER BY id
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.zero_event_flag)
            .bind(params.place_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = $2,
                place_id = $3,
                description = $4,
                zero_event_flag = $5,
                date_time_from_zero_event = $6,
                composition_id = $7,
                cm_position = $8,
                user_stamp_id = $9
             WHERE id = $1
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.place_id)
            .bind(&input.description)
            .bind(input.zero_event_flag)
            .bind(&input.date_time_from_zero_event)
            .bind(input.composition_id)
            .bind(&input.cm_position)
            .bind(input.user_stamp_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Its sequence edges go with it; every other
    /// reference to the event is cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "events", id).await
    }
}

// ---------------------------------------------------------------------------
// EventSequence
// ---------------------------------------------------------------------------

const EVENT_SEQUENCE_COLUMNS: &str =
    "id, event_before_id, event_after_id, straight, created_at, updated_at";

pub struct EventSequenceRepo;

impl EventSequenceRepo {
    /// Insert an ordering edge. A duplicate pair violates
    /// `uq_event_sequences_pair`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEventSequence,
    ) -> Result<EventSequence, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_sequences (event_before_id, event_after_id, straight)
             VALUES ($1, $2, $3)
             RETURNING {EVENT_SEQUENCE_COLUMNS}"
        );
        sqlx::query_as::<_, EventSequence>(&query)
            .bind(input.event_before_id)
            .bind(input.event_after_id)
            .bind(input.straight)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventSequence>, sqlx::Error> {
        let query = format!("SELECT {EVENT_SEQUENCE_COLUMNS} FROM event_sequences WHERE id = $1");
        sqlx::query_as::<_, EventSequence>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &PageParams,
    ) -> Result<Vec<EventSequence>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {EVENT_SEQUENCE_COLUMNS} FROM event_sequences
             ORDER BY id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, EventSequence>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEventSequence,
    ) -> Result<Option<EventSequence>, sqlx::Error> {
        let query = format!(
            "UPDATE event_sequences SET event_before_id = $2, event_after_id = $3, straight = $4
             WHERE id = $1
             RETURNING {EVENT_SEQUENCE_COLUMNS}"
        );
        sqlx::query_as::<_, EventSequence>(&query)
            .bind(id)
            .bind(input.event_before_id)
            .bind(input.event_after_id)
            .bind(input.straight)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "event_sequences", id).await
    }
}
