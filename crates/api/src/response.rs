//! Shared response envelope types for API handlers.
//!
//! Plain CRUD endpoints return the record (or array of records) as-is.
//! Composite views (detail pages, delete previews, the relation catalog)
//! use the `{ "data": ... }` envelope via [`DataResponse`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: detail }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
