//! Route definitions for global actors, user profiles, user stamps and
//! authors.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{author, global_actor, upload, user, user_stamp};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /global-actors                      -> list
/// POST   /global-actors                      -> create
/// GET    /global-actors/{id}                 -> get_by_id
/// PUT    /global-actors/{id}                 -> update
/// DELETE /global-actors/{id}                 -> delete
/// GET    /global-actors/{id}/delete-preview  -> delete_preview
///
/// GET    /users                              -> list
/// POST   /users                              -> create
/// GET    /users/{id}                         -> get_by_id
/// PUT    /users/{id}                         -> update
/// DELETE /users/{id}                         -> delete
/// GET    /users/{id}/delete-preview          -> delete_preview
///
/// GET    /user-stamps                        -> list
/// POST   /user-stamps                        -> create
/// GET    /user-stamps/{id}                   -> get_by_id
/// PUT    /user-stamps/{id}                   -> update
/// DELETE /user-stamps/{id}                   -> delete
/// GET    /user-stamps/{id}/delete-preview    -> delete_preview
///
/// GET    /authors                            -> list
/// POST   /authors                            -> create
/// GET    /authors/{id}                       -> get_by_id
/// PUT    /authors/{id}                       -> update
/// DELETE /authors/{id}                       -> delete
/// GET    /authors/{id}/delete-preview        -> delete_preview
/// POST   /authors/{id}/photo                 -> upload::upload_author_photo (multipart `file`)
/// DELETE /authors/{id}/photo                 -> upload::clear_author_photo
/// ```
pub fn router() -> Router<AppState> {
    let global_actor_routes = Router::new()
        .route("/", get(global_actor::list).post(global_actor::create))
        .route(
            "/{id}",
            get(global_actor::get_by_id)
                .put(global_actor::update)
                .delete(global_actor::delete),
        )
        .route("/{id}/delete-preview", get(global_actor::delete_preview));

    let user_routes = Router::new()
        .route("/", get(user::list).post(user::create))
        .route(
            "/{id}",
            get(user::get_by_id)
                .put(user::update)
                .delete(user::delete),
        )
        .route("/{id}/delete-preview", get(user::delete_preview));

    let user_stamp_routes = Router::new()
        .route("/", get(user_stamp::list).post(user_stamp::create))
        .route(
            "/{id}",
            get(user_stamp::get_by_id)
                .put(user_stamp::update)
                .delete(user_stamp::delete),
        )
        .route("/{id}/delete-preview", get(user_stamp::delete_preview));

    let author_routes = Router::new()
        .route("/", get(author::list).post(author::create))
        .route(
            "/{id}",
            get(author::get_by_id)
                .put(author::update)
                .delete(author::delete),
        )
        .route("/{id}/delete-preview", get(author::delete_preview))
        .route(
            "/{id}/photo",
            post(upload::upload_author_photo).delete(upload::clear_author_photo),
        );

    Router::new()
        .nest("/global-actors", global_actor_routes)
        .nest("/users", user_routes)
        .nest("/user-stamps", user_stamp_routes)
        .nest("/authors", author_routes)
}
