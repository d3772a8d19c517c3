//! Domain building blocks shared by the db and api crates.
//!
//! Nothing here touches the database or HTTP: identifiers, the error
//! taxonomy, the relation catalog, search/pagination helpers, upload rules
//! and field validators.

pub mod error;
pub mod media;
pub mod roles;
pub mod schema;
pub mod search;
pub mod types;
pub mod validation;
