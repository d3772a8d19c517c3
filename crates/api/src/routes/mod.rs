pub mod account;
pub mod auth;
pub mod decision;
pub mod episode;
pub mod fact;
pub mod health;
pub mod hero;
pub mod lookup;
pub mod person;
pub mod place;
pub mod saga;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every resource exposes list / create / get / update / delete plus a
/// delete preview; see the per-family modules for the full tables.
///
/// ```text
/// /auth/login, /auth/me                       login (public), current account
/// /accounts                                   staff accounts
/// /schema                                     relation catalog
///
/// /universes, /countries, /stamp-statuses,
/// /composition-types, /role-types             reference tables      (lookup)
/// /global-actors, /users, /user-stamps,
/// /authors                                    people                (person)
/// /sagas, /compositions                       publications          (saga)
/// /places, /events, /event-sequences          where and when        (place)
/// /heroes, /hero-values                       heroes + inline lists (hero)
/// /episodes, /participations                  episodes + cast       (episode)
/// /value-dimensions, /fact-types, /facts,
/// /affects-on-values, /fact-relations         values and facts      (fact)
/// /decision-types, /decisions, /action-types,
/// /hero-actions, /decision-evaluations        decisions and actions (decision)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/accounts", account::router())
        .route("/schema", get(handlers::schema::get_catalog))
        .merge(lookup::router())
        .merge(person::router())
        .merge(saga::router())
        .merge(place::router())
        .merge(hero::router())
        .merge(episode::router())
        .merge(fact::router())
        .merge(decision::router())
}
