//! Decisions, actions and the evaluations of hero actions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{DbId, Timestamp};
use storyverse_core::validation::not_blank;
use validator::Validate;

// ---------------------------------------------------------------------------
// DecisionType
// ---------------------------------------------------------------------------

/// A row from the `decision_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DecisionType {
    pub id: DbId,
    pub title: String,
    pub example: String,
    pub user_stamp_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDecisionType {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub example: String,
    pub user_stamp_id: Option<DbId>,
}

pub type UpdateDecisionType = CreateDecisionType;

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// A row from the `decisions` table. Owned by the deciding hero.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Decision {
    pub id: DbId,
    pub decision_type_id: Option<DbId>,
    pub hero_id: DbId,
    pub event_after_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDecision {
    pub decision_type_id: Option<DbId>,
    /// Required. The nested create endpoint fills it from the path.
    pub hero_id: Option<DbId>,
    pub event_after_id: Option<DbId>,
}

pub type UpdateDecision = CreateDecision;

// ---------------------------------------------------------------------------
// ActionType
// ---------------------------------------------------------------------------

/// A row from the `action_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionType {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub user_stamp_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActionType {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub user_stamp_id: Option<DbId>,
}

pub type UpdateActionType = CreateActionType;

// ---------------------------------------------------------------------------
// HeroAction
// ---------------------------------------------------------------------------

/// A row from the `hero_actions` table. Owned by the acting hero; the
/// decision, cause event and episode role are weak references.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroAction {
    pub id: DbId,
    pub hero_id: DbId,
    pub action_type_id: Option<DbId>,
    pub based_on_decision_id: Option<DbId>,
    pub cause_event_id: Option<DbId>,
    /// The participation (hero-in-episode role) the action was taken in.
    pub in_role_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroAction {
    /// Required. The nested create endpoint fills it from the path.
    pub hero_id: Option<DbId>,
    pub action_type_id: Option<DbId>,
    pub based_on_decision_id: Option<DbId>,
    pub cause_event_id: Option<DbId>,
    pub in_role_id: Option<DbId>,
}

pub type UpdateHeroAction = CreateHeroAction;

// ---------------------------------------------------------------------------
// DecisionEvaluation
// ---------------------------------------------------------------------------

/// A row from the `decision_evaluations` table: a global actor's judgement
/// of a hero action against a value dimension.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DecisionEvaluation {
    pub id: DbId,
    pub hero_id: DbId,
    pub hero_action_id: DbId,
    pub evaluator_gla_id: Option<DbId>,
    pub event_after_id: Option<DbId>,
    pub value_dimension_id: Option<DbId>,
    /// Influence in `[-1, 1]`.
    pub weight: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDecisionEvaluation {
    pub hero_id: DbId,
    pub hero_action_id: DbId,
    pub evaluator_gla_id: Option<DbId>,
    pub event_after_id: Option<DbId>,
    pub value_dimension_id: Option<DbId>,
    #[validate(range(min = -1.0, max = 1.0))]
    pub weight: f64,
}

pub type UpdateDecisionEvaluation = CreateDecisionEvaluation;
