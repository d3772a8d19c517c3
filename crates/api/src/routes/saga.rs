//! Route definitions for sagas and compositions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{composition, saga, upload};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /sagas                             -> list
/// POST   /sagas                             -> create
/// GET    /sagas/{id}                        -> get_by_id
/// PUT    /sagas/{id}                        -> update
/// DELETE /sagas/{id}                        -> delete
/// GET    /sagas/{id}/delete-preview         -> delete_preview
///
/// GET    /compositions                      -> list
/// POST   /compositions                      -> create
/// GET    /compositions/{id}                 -> get_by_id
/// PUT    /compositions/{id}                 -> update
/// DELETE /compositions/{id}                 -> delete
/// GET    /compositions/{id}/delete-preview  -> delete_preview
/// POST   /compositions/{id}/file            -> upload::upload_composition_file (multipart `file`)
/// DELETE /compositions/{id}/file            -> upload::clear_composition_file
/// ```
pub fn router() -> Router<AppState> {
    let saga_routes = Router::new()
        .route("/", get(saga::list).post(saga::create))
        .route(
            "/{id}",
            get(saga::get_by_id)
                .put(saga::update)
                .delete(saga::delete),
        )
        .route("/{id}/delete-preview", get(saga::delete_preview));

    let composition_routes = Router::new()
        .route("/", get(composition::list).post(composition::create))
        .route(
            "/{id}",
            get(composition::get_by_id)
                .put(composition::update)
                .delete(composition::delete),
        )
        .route("/{id}/delete-preview", get(composition::delete_preview))
        .route(
            "/{id}/file",
            post(upload::upload_composition_file).delete(upload::clear_composition_file),
        );

    Router::new()
        .nest("/sagas", saga_routes)
        .nest("/compositions", composition_routes)
}
