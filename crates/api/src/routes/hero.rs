//! Route definitions for heroes, their inline collections and hero values.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{decision, hero, hero_action, hero_value, upload};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /heroes                           -> list
/// POST   /heroes                           -> create
/// GET    /heroes/{id}                      -> get_by_id
/// PUT    /heroes/{id}                      -> update
/// DELETE /heroes/{id}                      -> delete
/// GET    /heroes/{id}/delete-preview       -> delete_preview
/// GET    /heroes/{id}/detail               -> hero::get_detail
/// POST   /heroes/{id}/photo                -> upload::upload_hero_photo (multipart `file`)
/// DELETE /heroes/{id}/photo                -> upload::clear_hero_photo
/// GET    /heroes/{id}/values               -> hero_value::list_by_hero
/// POST   /heroes/{id}/values               -> hero_value::create_for_hero
/// GET    /heroes/{id}/actions              -> hero_action::list_by_hero
/// POST   /heroes/{id}/actions              -> hero_action::create_for_hero
/// GET    /heroes/{id}/decisions            -> decision::list_by_hero
/// POST   /heroes/{id}/decisions            -> decision::create_for_hero
///
/// GET    /hero-values                      -> list
/// POST   /hero-values                      -> create
/// GET    /hero-values/{id}                 -> get_by_id
/// PUT    /hero-values/{id}                 -> update
/// DELETE /hero-values/{id}                 -> delete
/// GET    /hero-values/{id}/delete-preview  -> delete_preview
/// ```
pub fn router() -> Router<AppState> {
    let hero_routes = Router::new()
        .route("/", get(hero::list).post(hero::create))
        .route(
            "/{id}",
            get(hero::get_by_id)
                .put(hero::update)
                .delete(hero::delete),
        )
        .route("/{id}/delete-preview", get(hero::delete_preview))
        .route("/{id}/detail", get(hero::get_detail))
        .route(
            "/{id}/photo",
            post(upload::upload_hero_photo).delete(upload::clear_hero_photo),
        )
        .route(
            "/{id}/values",
            get(hero_value::list_by_hero).post(hero_value::create_for_hero),
        )
        .route(
            "/{id}/actions",
            get(hero_action::list_by_hero).post(hero_action::create_for_hero),
        )
        .route(
            "/{id}/decisions",
            get(decision::list_by_hero).post(decision::create_for_hero),
        );

    let hero_value_routes = Router::new()
        .route("/", get(hero_value::list).post(hero_value::create))
        .route(
            "/{id}",
            get(hero_value::get_by_id)
                .put(hero_value::update)
                .delete(hero_value::delete),
        )
        .route("/{id}/delete-preview", get(hero_value::delete_preview));

    Router::new()
        .nest("/heroes", hero_routes)
        .nest("/hero-values", hero_value_routes)
}
