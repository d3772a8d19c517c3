//! Domain model structs and DTOs.
//!
//! Each submodule contains, per table:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - An update alias: `PUT` replaces every editable column, the way an admin
//!   form submits the whole record, so optional references can be cleared
//! - A `Deserialize` list-params struct carrying the admin search and filters
//!
//! File columns (`photo_file`, `file_source`) are absent from the DTOs; they
//! change only through the upload endpoints.

pub mod account;
pub mod decision;
pub mod deletion;
pub mod episode;
pub mod fact;
pub mod hero;
pub mod lookup;
pub mod person;
pub mod place;
pub mod saga;

use serde::Deserialize;

/// Query parameters shared by lists that only support a text search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for lists with neither search nor filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
