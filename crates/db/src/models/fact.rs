//! Value dimensions, facts and how facts influence values.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{DbId, Timestamp};
use storyverse_core::validation::not_blank;
use validator::Validate;

// ---------------------------------------------------------------------------
// ValueDimension
// ---------------------------------------------------------------------------

/// A row from the `value_dimensions` table: an axis heroes are measured on.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ValueDimension {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// What the world looks like when the value is fully realised.
    pub utopia_picture: String,
    pub user_stamp_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateValueDimension {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub utopia_picture: String,
    pub user_stamp_id: Option<DbId>,
}

pub type UpdateValueDimension = CreateValueDimension;

// ---------------------------------------------------------------------------
// FactType
// ---------------------------------------------------------------------------

/// A row from the `fact_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FactType {
    pub id: DbId,
    pub title: String,
    pub is_numerical: bool,
    pub measure: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFactType {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    pub is_numerical: bool,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub measure: String,
}

pub type UpdateFactType = CreateFactType;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactTypeListParams {
    pub q: Option<String>,
    pub is_numerical: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Fact
// ---------------------------------------------------------------------------

/// A row from the `facts` table. Owned by its composition.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Fact {
    pub id: DbId,
    pub composition_id: DbId,
    pub title: String,
    pub description: String,
    pub fact_type_id: Option<DbId>,
    pub numeric_value: Option<f64>,
    pub condition_for_effect: String,
    pub result_of_event_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFact {
    pub composition_id: DbId,
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub fact_type_id: Option<DbId>,
    pub numeric_value: Option<f64>,
    #[serde(default)]
    pub condition_for_effect: String,
    pub result_of_event_id: Option<DbId>,
}

pub type UpdateFact = CreateFact;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactListParams {
    pub q: Option<String>,
    pub fact_type_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A fact together with the relations it is the base of.
#[derive(Debug, Clone, Serialize)]
pub struct FactDetail {
    #[serde(flatten)]
    pub fact: Fact,
    pub relations: Vec<FactRelation>,
}

// ---------------------------------------------------------------------------
// AffectOnValue
// ---------------------------------------------------------------------------

/// A row from the `affects_on_values` table: how much a fact type moves a
/// value dimension. At most one row per (dimension, fact type) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AffectOnValue {
    pub id: DbId,
    pub value_dimension_id: DbId,
    pub fact_type_id: DbId,
    pub weight: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAffectOnValue {
    pub value_dimension_id: DbId,
    pub fact_type_id: DbId,
    pub weight: f64,
}

pub type UpdateAffectOnValue = CreateAffectOnValue;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AffectOnValueListParams {
    pub value_dimension_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// FactRelation
// ---------------------------------------------------------------------------

/// A row from the `fact_relations` table: `followed_fact` depends on
/// `based_fact`. Relations sharing a `group_id` are alternatives.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FactRelation {
    pub id: DbId,
    pub based_fact_id: DbId,
    pub followed_fact_id: DbId,
    pub group_id: String,
    pub event_relation_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFactRelation {
    /// Required. The nested create endpoint fills it from the path.
    pub based_fact_id: Option<DbId>,
    pub followed_fact_id: DbId,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub group_id: String,
    pub event_relation_id: Option<DbId>,
}

pub type UpdateFactRelation = CreateFactRelation;
