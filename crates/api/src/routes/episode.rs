//! Route definitions for episodes and participations.

use axum::routing::get;
use axum::Router;

use crate::handlers::{episode, participation};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /episodes                            -> list
/// POST   /episodes                            -> create
/// GET    /episodes/{id}                       -> get_by_id
/// PUT    /episodes/{id}                       -> update
/// DELETE /episodes/{id}                       -> delete
/// GET    /episodes/{id}/delete-preview        -> delete_preview
/// GET    /episodes/{id}/detail                -> episode::get_detail
/// GET    /episodes/{id}/participations        -> participation::list_by_episode
/// POST   /episodes/{id}/participations        -> participation::create_for_episode
///
/// GET    /participations                      -> list
/// POST   /participations                      -> create
/// GET    /participations/{id}                 -> get_by_id
/// PUT    /participations/{id}                 -> update
/// DELETE /participations/{id}                 -> delete
/// GET    /participations/{id}/delete-preview  -> delete_preview
/// ```
pub fn router() -> Router<AppState> {
    let episode_routes = Router::new()
        .route("/", get(episode::list).post(episode::create))
        .route(
            "/{id}",
            get(episode::get_by_id)
                .put(episode::update)
                .delete(episode::delete),
        )
        .route("/{id}/delete-preview", get(episode::delete_preview))
        .route("/{id}/detail", get(episode::get_detail))
        .route(
            "/{id}/participations",
            get(participation::list_by_episode).post(participation::create_for_episode),
        );

    let participation_routes = Router::new()
        .route("/", get(participation::list).post(participation::create))
        .route(
            "/{id}",
            get(participation::get_by_id)
                .put(participation::update)
                .delete(participation::delete),
        )
        .route("/{id}/delete-preview", get(participation::delete_preview));

    Router::new()
        .nest("/episodes", episode_routes)
        .nest("/participations", participation_routes)
}
