//! Handler for `/schema`: the relation catalog the delete preview walks.

use axum::Json;
use storyverse_core::schema::{catalog, Catalog};

use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;

/// GET /api/v1/schema
pub async fn get_catalog(RequireStaff(_staff): RequireStaff) -> Json<DataResponse<Catalog>> {
    Json(DataResponse { data: catalog() })
}
