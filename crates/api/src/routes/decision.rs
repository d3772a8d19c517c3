//! Route definitions for decisions, actions and their evaluations.

use axum::routing::get;
use axum::Router;

use crate::handlers::{action_type, decision, decision_evaluation, decision_type, hero_action};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /decision-types                            -> list
/// POST   /decision-types                            -> create
/// GET    /decision-types/{id}                       -> get_by_id
/// PUT    /decision-types/{id}                       -> update
/// DELETE /decision-types/{id}                       -> delete
/// GET    /decision-types/{id}/delete-preview        -> delete_preview
///
/// GET    /decisions                                 -> list
/// POST   /decisions                                 -> create
/// GET    /decisions/{id}                            -> get_by_id
/// PUT    /decisions/{id}                            -> update
/// DELETE /decisions/{id}                            -> delete
/// GET    /decisions/{id}/delete-preview             -> delete_preview
///
/// GET    /action-types                              -> list
/// POST   /action-types                              -> create
/// GET    /action-types/{id}                         -> get_by_id
/// PUT    /action-types/{id}                         -> update
/// DELETE /action-types/{id}                         -> delete
/// GET    /action-types/{id}/delete-preview          -> delete_preview
///
/// GET    /hero-actions                              -> list
/// POST   /hero-actions                              -> create
/// GET    /hero-actions/{id}                         -> get_by_id
/// PUT    /hero-actions/{id}                         -> update
/// DELETE /hero-actions/{id}                         -> delete
/// GET    /hero-actions/{id}/delete-preview          -> delete_preview
///
/// GET    /decision-evaluations                      -> list
/// POST   /decision-evaluations                      -> create
/// GET    /decision-evaluations/{id}                 -> get_by_id
/// PUT    /decision-evaluations/{id}                 -> update
/// DELETE /decision-evaluations/{id}                 -> delete
/// GET    /decision-evaluations/{id}/delete-preview  -> delete_preview
/// ```
pub fn router() -> Router<AppState> {
    let decision_type_routes = Router::new()
        .route("/", get(decision_type::list).post(decision_type::create))
        .route(
            "/{id}",
            get(decision_type::get_by_id)
                .put(decision_type::update)
                .delete(decision_type::delete),
        )
        .route("/{id}/delete-preview", get(decision_type::delete_preview));

    let decision_routes = Router::new()
        .route("/", get(decision::list).post(decision::create))
        .route(
            "/{id}",
            get(decision::get_by_id)
                .put(decision::update)
                .delete(decision::delete),
        )
        .route("/{id}/delete-preview", get(decision::delete_preview));

    let action_type_routes = Router::new()
        .route("/", get(action_type::list).post(action_type::create))
        .route(
            "/{id}",
            get(action_type::get_by_id)
                .put(action_type::update)
                .delete(action_type::delete),
        )
        .route("/{id}/delete-preview", get(action_type::delete_preview));

    let hero_action_routes = Router::new()
        .route("/", get(hero_action::list).post(hero_action::create))
        .route(
            "/{id}",
            get(hero_action::get_by_id)
                .put(hero_action::update)
                .delete(hero_action::delete),
        )
        .route("/{id}/delete-preview", get(hero_action::delete_preview));

    let decision_evaluation_routes = Router::new()
        .route("/", get(decision_evaluation::list).post(decision_evaluation::create))
        .route(
            "/{id}",
            get(decision_evaluation::get_by_id)
                .put(decision_evaluation::update)
                .delete(decision_evaluation::delete),
        )
        .route("/{id}/delete-preview", get(decision_evaluation::delete_preview));

    Router::new()
        .nest("/decision-types", decision_type_routes)
        .nest("/decisions", decision_routes)
        .nest("/action-types", action_type_routes)
        .nest("/hero-actions", hero_action_routes)
        .nest("/decision-evaluations", decision_evaluation_routes)
}
