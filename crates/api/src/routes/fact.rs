//! Route definitions for value dimensions, fact types, facts and the
//! links between them.

use axum::routing::get;
use axum::Router;

use crate::handlers::{affect_on_value, fact, fact_relation, fact_type, value_dimension};
use crate::state::AppState;

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// GET    /value-dimensions                       -> list
/// POST   /value-dimensions                       -> create
/// GET    /value-dimensions/{id}                  -> get_by_id
/// PUT    /value-dimensions/{id}                  -> update
/// DELETE /value-dimensions/{id}                  -> delete
/// GET    /value-dimensions/{id}/delete-preview   -> delete_preview
///
/// GET    /fact-types                             -> list
/// POST   /fact-types                             -> create
/// GET    /fact-types/{id}                        -> get_by_id
/// PUT    /fact-types/{id}                        -> update
/// DELETE /fact-types/{id}                        -> delete
/// GET    /fact-types/{id}/delete-preview         -> delete_preview
///
/// GET    /facts                                  -> list
/// POST   /facts                                  -> create
/// GET    /facts/{id}                             -> get_by_id
/// PUT    /facts/{id}                             -> update
/// DELETE /facts/{id}                             -> delete
/// GET    /facts/{id}/delete-preview              -> delete_preview
/// GET    /facts/{id}/detail                      -> fact::get_detail
/// GET    /facts/{id}/relations                   -> fact_relation::list_by_fact
/// POST   /facts/{id}/relations                   -> fact_relation::create_for_fact
///
/// GET    /affects-on-values                      -> list
/// POST   /affects-on-values                      -> create
/// GET    /affects-on-values/{id}                 -> get_by_id
/// PUT    /affects-on-values/{id}                 -> update
/// DELETE /affects-on-values/{id}                 -> delete
/// GET    /affects-on-values/{id}/delete-preview  -> delete_preview
///
/// GET    /fact-relations                         -> list
/// POST   /fact-relations                         -> create
/// GET    /fact-relations/{id}                    -> get_by_id
/// PUT    /fact-relations/{id}                    -> update
/// DELETE /fact-relations/{id}                    -> delete
/// GET    /fact-relations/{id}/delete-preview     -> delete_preview
/// ```
pub fn router() -> Router<AppState> {
    let value_dimension_routes = Router::new()
        .route("/", get(value_dimension::list).post(value_dimension::create))
        .route(
            "/{id}",
            get(value_dimension::get_by_id)
                .put(value_dimension::update)
                .delete(value_dimension::delete),
        )
        .route("/{id}/delete-preview", get(value_dimension::delete_preview));

    let fact_type_routes = Router::new()
        .route("/", get(fact_type::list).post(fact_type::create))
        .route(
            "/{id}",
            get(fact_type::get_by_id)
                .put(fact_type::update)
                .delete(fact_type::delete),
        )
        .route("/{id}/delete-preview", get(fact_type::delete_preview));

    let fact_routes = Router::new()
        .route("/", get(fact::list).post(fact::create))
        .route(
            "/{id}",
            get(fact::get_by_id)
                .put(fact::update)
                .delete(fact::delete),
        )
        .route("/{id}/delete-preview", get(fact::delete_preview))
        .route("/{id}/detail", get(fact::get_detail))
        .route(
            "/{id}/relations",
            get(fact_relation::list_by_fact).post(fact_relation::create_for_fact),
        );

    let affect_on_value_routes = Router::new()
        .route("/", get(affect_on_value::list).post(affect_on_value::create))
        .route(
            "/{id}",
            get(affect_on_value::get_by_id)
                .put(affect_on_value::update)
                .delete(affect_on_value::delete),
        )
        .route("/{id}/delete-preview", get(affect_on_value::delete_preview));

    let fact_relation_routes = Router::new()
        .route("/", get(fact_relation::list).post(fact_relation::create))
        .route(
            "/{id}",
            get(fact_relation::get_by_id)
                .put(fact_relation::update)
                .delete(fact_relation::delete),
        )
        .route("/{id}/delete-preview", get(fact_relation::delete_preview));

    Router::new()
        .nest("/value-dimensions", value_dimension_routes)
        .nest("/fact-types", fact_type_routes)
        .nest("/facts", fact_routes)
        .nest("/affects-on-values", affect_on_value_routes)
        .nest("/fact-relations", fact_relation_routes)
}
