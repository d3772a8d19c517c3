//! Route definitions for places, events and event sequences.

use axum::routing::get;
use axum::Router;

use crate::handlers::{event, event_sequence, place};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /places                               -> list
/// POST   /places                               -> create
/// GET    /places/{id}                          -> get_by_id
/// PUT    /places/{id}                          -> update
/// DELETE /places/{id}                          -> delete
/// GET    /places/{id}/delete-preview           -> delete_preview
///
/// GET    /events                               -> list
/// POST   /events                               -> create
/// GET    /events/{id}                          -> get_by_id
/// PUT    /events/{id}                          -> update
/// DELETE /events/{id}                          -> delete
/// GET    /events/{id}/delete-preview           -> delete_preview
///
/// GET    /event-sequences                      -> list
/// POST   /event-sequences                      -> create
/// GET    /event-sequences/{id}                 -> get_by_id
/// PUT    /event-sequences/{id}                 -> update
/// DELETE /event-sequences/{id}                 -> delete
/// GET    /event-sequences/{id}/delete-preview  -> delete_preview
/// ```
pub fn router() -> Router<AppState> {
    let place_routes = Router::new()
        .route("/", get(place::list).post(place::create))
        .route(
            "/{id}",
            get(place::get_by_id)
                .put(place::update)
                .delete(place::delete),
        )
        .route("/{id}/delete-preview", get(place::delete_preview));

    let event_routes = Router::new()
        .route("/", get(event::list).post(event::create))
        .route(
            "/{id}",
            get(event::get_by_id)
                .put(event::update)
                .delete(event::delete),
        )
        .route("/{id}/delete-preview", get(event::delete_preview));

    let event_sequence_routes = Router::new()
        .route("/", get(event_sequence::list).post(event_sequence::create))
        .route(
            "/{id}",
            get(event_sequence::get_by_id)
                .put(event_sequence::update)
                .delete(event_sequence::delete),
        )
        .route("/{id}/delete-preview", get(event_sequence::delete_preview));

    Router::new()
        .nest("/places", place_routes)
        .nest("/events", event_routes)
        .nest("/event-sequences", event_sequence_routes)
}
