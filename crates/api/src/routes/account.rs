//! Route definitions for `/accounts`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes mounted at `/accounts`.
///
/// ```text
/// GET    /                       -> list (?q= matches username)
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// DELETE /{id}                   -> delete
/// PUT    /{id}/active            -> set_active
/// GET    /{id}/delete-preview    -> delete_preview
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(account::list).post(account::create))
        .route("/{id}", get(account::get_by_id).delete(account::delete))
        .route("/{id}/active", put(account::set_active))
        .route("/{id}/delete-preview", get(account::delete_preview))
}
