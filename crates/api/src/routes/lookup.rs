//! Route definitions for the reference tables.

use axum::routing::get;
use axum::Router;

use crate::handlers::{composition_type, country, role_type, stamp_status, universe};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /universes                              -> list
/// POST   /universes                              -> create
/// GET    /universes/{id}                         -> get_by_id
/// PUT    /universes/{id}                         -> update
/// DELETE /universes/{id}                         -> delete
/// GET    /universes/{id}/delete-preview          -> delete_preview
///
/// GET    /countries                              -> list
/// POST   /countries                              -> create
/// GET    /countries/{id}                         -> get_by_id
/// PUT    /countries/{id}                         -> update
/// DELETE /countries/{id}                         -> delete
/// GET    /countries/{id}/delete-preview          -> delete_preview
///
/// GET    /stamp-statuses                         -> list
/// POST   /stamp-statuses                         -> create
/// GET    /stamp-statuses/{id}                    -> get_by_id
/// PUT    /stamp-statuses/{id}                    -> update
/// DELETE /stamp-statuses/{id}                    -> delete
/// GET    /stamp-statuses/{id}/delete-preview     -> delete_preview
///
/// GET    /composition-types                      -> list
/// POST   /composition-types                      -> create
/// GET    /composition-types/{id}                 -> get_by_id
/// PUT    /composition-types/{id}                 -> update
/// DELETE /composition-types/{id}                 -> delete
/// GET    /composition-types/{id}/delete-preview  -> delete_preview
///
/// GET    /role-types                             -> list
/// POST   /role-types                             -> create
/// GET    /role-types/{id}                        -> get_by_id
/// PUT    /role-types/{id}                        -> update
/// DELETE /role-types/{id}                        -> delete
/// GET    /role-types/{id}/delete-preview         -> delete_preview
/// ```
pub fn router() -> Router<AppState> {
    let universe_routes = Router::new()
        .route("/", get(universe::list).post(universe::create))
        .route(
            "/{id}",
            get(universe::get_by_id)
                .put(universe::update)
                .delete(universe::delete),
        )
        .route("/{id}/delete-preview", get(universe::delete_preview));

    let country_routes = Router::new()
        .route("/", get(country::list).post(country::create))
        .route(
            "/{id}",
            get(country::get_by_id)
                .put(country::update)
                .delete(country::delete),
        )
        .route("/{id}/delete-preview", get(country::delete_preview));

    let stamp_status_routes = Router::new()
        .route("/", get(stamp_status::list).post(stamp_status::create))
        .route(
            "/{id}",
            get(stamp_status::get_by_id)
                .put(stamp_status::update)
                .delete(stamp_status::delete),
        )
        .route("/{id}/delete-preview", get(stamp_status::delete_preview));

    let composition_type_routes = Router::new()
        .route("/", get(composition_type::list).post(composition_type::create))
        .route(
            "/{id}",
            get(composition_type::get_by_id)
                .put(composition_type::update)
                .delete(composition_type::delete),
        )
        .route("/{id}/delete-preview", get(composition_type::delete_preview));

    let role_type_routes = Router::new()
        .route("/", get(role_type::list).post(role_type::create))
        .route(
            "/{id}",
            get(role_type::get_by_id)
                .put(role_type::update)
                .delete(role_type::delete),
        )
        .route("/{id}/delete-preview", get(role_type::delete_preview));

    Router::new()
        .nest("/universes", universe_routes)
        .nest("/countries", country_routes)
        .nest("/stamp-statuses", stamp_status_routes)
        .nest("/composition-types", composition_type_routes)
        .nest("/role-types", role_type_routes)
}
