//! Repositories for `decision_types`, `decisions`, `action_types`,
//! `hero_actions` and `decision_evaluations`.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::{delete_row, page};
use crate::models::decision::{
    ActionType, CreateActionType, CreateDecision, CreateDecisionEvaluation, CreateDecisionType,
    CreateHeroAction, Decision, DecisionEvaluation, DecisionType, HeroAction, UpdateActionType,
    UpdateDecision, UpdateDecisionEvaluation, UpdateDecisionType, UpdateHeroAction,
};
use crate::models::{PageParams, SearchParams};

// ---------------------------------------------------------------------------
// DecisionType
// ---------------------------------------------------------------------------

const DECISION_TYPE_COLUMNS: &str = "id, title, example, user_stamp_id, created_at, updated_at";

pub struct DecisionTypeRepo;

impl DecisionTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateDecisionType,
    ) -> Result<DecisionType, sqlx::Error> {
        let query = format!(
            "INSERT INTO decision_types (title, example, user_stamp_id)
             VALUES ($1, $2, $3)
             RETURNING {DECISION_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, DecisionType>(&query)
            .bind(&input.title)
            .bind(&input.example)
            .bind(input.user_stamp_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DecisionType>, sqlx::Error> {
        let query = format!("SELECT {DECISION_TYPE_COLUMNS} FROM decision_types WHERE id = $1");
        sqlx::query_as::<_, DecisionType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &SearchParams,
    ) -> Result<Vec<DecisionType>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {DECISION_TYPE_COLUMNS} FROM decision_types
             WHERE title ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, DecisionType>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDecisionType,
    ) -> Result<Option<DecisionType>, sqlx::Error> {
        let query = format!(
            "UPDATE decision_types SET title = $2, example = $3, user_stamp_id = $4
             WHERE id = $1
             RETURNING {DECISION_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, DecisionType>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.example)
            .bind(input.user_stamp_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "decision_types", id).await
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

const DECISION_COLUMNS: &str =
    "id, decision_type_id, hero_id, event_after_id, created_at, updated_at";

pub struct DecisionRepo;

impl DecisionRepo {
    pub async fn create(pool: &PgPool, input: &CreateDecision) -> Result<Decision, sqlx::Error> {
        let query = format!(
            "INSERT INTO decisions (decision_type_id, hero_id, event_after_id)
             VALUES ($1, $2, $3)
             RETURNING {DECISION_COLUMNS}"
        );
        sqlx::query_as::<_, Decision>(&query)
            .bind(input.decision_type_id)
            .bind(input.hero_id)
            .bind(input.event_after_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Decision>, sqlx::Error> {
        let query = format!("SELECT {DECISION_COLUMNS} FROM decisions WHERE id = $1");
        sqlx::query_as::<_, Decision>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &PageParams) -> Result<Vec<Decision>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {DECISION_COLUMNS} FROM decisions ORDER BY id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Decision>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_hero(pool: &PgPool, hero_id: DbId) -> Result<Vec<Decision>, sqlx::Error> {
        let query =
            format!("SELECT {DECISION_COLUMNS} FROM decisions WHERE hero_id = $1 ORDER BY id");
        sqlx::query_as::<_, Decision>(&query)
            .bind(hero_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDecision,
    ) -> Result<Option<Decision>, sqlx::Error> {
        let query = format!(
            "UPDATE decisions SET decision_type_id = $2, hero_id = $3, event_after_id = $4
             WHERE id = $1
             RETURNING {DECISION_COLUMNS}"
        );
        sqlx::query_as::<_, Decision>(&query)
            .bind(id)
            .bind(input.decision_type_id)
            .bind(input.hero_id)
            .bind(input.event_after_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a decision. Actions based on it survive with the link cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "decisions", id).await
    }
}

// ---------------------------------------------------------------------------
// ActionType
// ---------------------------------------------------------------------------

const ACTION_TYPE_COLUMNS: &str = "id, title, description, user_stamp_id, created_at, updated_at";

pub struct ActionTypeRepo;

impl ActionTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateActionType,
    ) -> Result<ActionType, sqlx::Error> {
        let query = format!(
            "INSERT INTO action_types (title, description, user_stamp_id)
             VALUES ($1, $2, $3)
             RETURNING {ACTION_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, ActionType>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.user_stamp_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ActionType>, sqlx::Error> {
        let query = format!("SELECT {ACTION_TYPE_COLUMNS} FROM action_types WHERE id = $1");
        sqlx::query_as::<_, ActionType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &PageParams) -> Result<Vec<ActionType>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {ACTION_TYPE_COLUMNS} FROM action_types ORDER BY id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ActionType>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActionType,
    ) -> Result<Option<ActionType>, sqlx::Error> {
        let query = format!(
            "UPDATE action_types SET title = $2, description = $3, user_stamp_id = $4
             WHERE id = $1
             RETURNING {ACTION_TYPE_COLUMNS}"
        );
        sqlx::query_as::<_, ActionType>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.user_stamp_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "action_types", id).await
    }
}

// ---------------------------------------------------------------------------
// HeroAction
// ---------------------------------------------------------------------------

const HERO_ACTION_COLUMNS: &str = "id, hero_id, action_type_id, based_on_decision_id, \
     cause_event_id, in_role_id, created_at, updated_at";

pub struct HeroActionRepo;

impl HeroActionRepo {
    pub async fn create(pool: &PgPool, input: &CreateHeroAction) -> Result<HeroAction, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_actions (hero_id, action_type_id, based_on_decision_id,
                                       cause_event_id, in_role_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {HERO_ACTION_COLUMNS}"
        );
        sqlx::query_as::<_, HeroAction>(&query)
            .bind(input.hero_id)
            .bind(input.action_type_id)
            .bind(input.based_on_decision_id)
            .bind(input.cause_event_id)
            .bind(input.in_role_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroAction>, sqlx::Error> {
        let query = format!("SELECT {HERO_ACTION_COLUMNS} FROM hero_actions WHERE id = $1");
        sqlx::query_as::<_, HeroAction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &PageParams) -> Result<Vec<HeroAction>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {HERO_ACTION_COLUMNS} FROM hero_actions ORDER BY id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, HeroAction>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_hero(
        pool: &PgPool,
        hero_id: DbId,
    ) -> Result<Vec<HeroAction>, sqlx::Error> {
        let query = format!(
            "SELECT {HERO_ACTION_COLUMNS} FROM hero_actions WHERE hero_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, HeroAction>(&query)
            .bind(hero_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroAction,
    ) -> Result<Option<HeroAction>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_actions SET
                hero_id = $2,
                action_type_id = $3,
                based_on_decision_id = $4,
                cause_event_id = $5,
                in_role_id = $6
             WHERE id = $1
             RETURNING {HERO_ACTION_COLUMNS}"
        );
        sqlx::query_as::<_, HeroAction>(&query)
            .bind(id)
            .bind(input.hero_id)
            .bind(input.action_type_id)
            .bind(input.based_on_decision_id)
            .bind(input.cause_event_id)
            .bind(input.in_role_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an action together with its evaluations.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "hero_actions", id).await
    }
}

// ---------------------------------------------------------------------------
// DecisionEvaluation
// ---------------------------------------------------------------------------

const DECISION_EVALUATION_COLUMNS: &str = "id, hero_id, hero_action_id, evaluator_gla_id, \
     event_after_id, value_dimension_id, weight, created_at, updated_at";

pub struct DecisionEvaluationRepo;

impl DecisionEvaluationRepo {
    /// Insert an evaluation. A weight outside `[-1, 1]` violates
    /// `ck_decision_evaluations_weight`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDecisionEvaluation,
    ) -> Result<DecisionEvaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO decision_evaluations (hero_id, hero_action_id, evaluator_gla_id,
                                               event_after_id, value_dimension_id, weight)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {DECISION_EVALUATION_COLUMNS}"
        );
        sqlx::query_as::<_, DecisionEvaluation>(&query)
            .bind(input.hero_id)
            .bind(input.hero_action_id)
            .bind(input.evaluator_gla_id)
            .bind(input.event_after_id)
            .bind(input.value_dimension_id)
            .bind(input.weight)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DecisionEvaluation>, sqlx::Error> {
        let query =
            format!("SELECT {DECISION_EVALUATION_COLUMNS} FROM decision_evaluations WHERE id = $1");
        sqlx::query_as::<_, DecisionEvaluation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        params: &PageParams,
    ) -> Result<Vec<DecisionEvaluation>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {DECISION_EVALUATION_COLUMNS} FROM decision_evaluations
             ORDER BY id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, DecisionEvaluation>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDecisionEvaluation,
    ) -> Result<Option<DecisionEvaluation>, sqlx::Error> {
        let query = format!(
            "UPDATE decision_evaluations SET
                hero_id = $2,
                hero_action_id = $3,
                evaluator_gla_id = $4,
                event_after_id = $5,
                value_dimension_id = $6,
                weight = $7
             WHERE id = $1
             RETURNING {DECISION_EVALUATION_COLUMNS}"
        );
        sqlx::query_as::<_, DecisionEvaluation>(&query)
            .bind(id)
            .bind(input.hero_id)
            .bind(input.hero_action_id)
            .bind(input.evaluator_gla_id)
            .bind(input.event_after_id)
            .bind(input.value_dimension_id)
            .bind(input.weight)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "decision_evaluations", id).await
    }
}
