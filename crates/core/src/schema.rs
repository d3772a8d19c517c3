//! Relation catalog for the storyverse schema.
//!
//! Every foreign key in `db/migrations` is listed here together with the
//! action the database applies when the referenced row is deleted. The
//! catalog drives the delete preview, is published by the schema endpoint,
//! and is checked against the migrated database by the db test suite.

use serde::Serialize;

/// What happens to a referencing row when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnDelete {
    /// The referencing row is deleted too (ownership).
    Cascade,
    /// The referencing column is cleared; the row survives.
    SetNull,
}

impl OnDelete {
    /// The SQL spelling used in `ON DELETE` clauses and by
    /// `information_schema.referential_constraints.delete_rule`.
    pub fn as_sql(self) -> &'static str {
        match self {
            OnDelete::Cascade => "CASCADE",
            OnDelete::SetNull => "SET NULL",
        }
    }

    /// Parse an `information_schema` delete rule.
    pub fn from_sql(rule: &str) -> Option<Self> {
        match rule {
            "CASCADE" => Some(OnDelete::Cascade),
            "SET NULL" => Some(OnDelete::SetNull),
            _ => None,
        }
    }
}

/// A table and the entity name used in API messages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableDef {
    pub table: &'static str,
    pub entity: &'static str,
}

/// A single-column foreign key.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Relation {
    pub table: &'static str,
    pub column: &'static str,
    pub references: &'static str,
    pub on_delete: OnDelete,
    /// Whether the column is `NOT NULL`.
    pub required: bool,
}

/// A composite uniqueness constraint over two referencing columns.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UniquePair {
    pub table: &'static str,
    pub columns: [&'static str; 2],
    pub constraint: &'static str,
}

const fn owned(table: &'static str, column: &'static str, references: &'static str) -> Relation {
    Relation {
        table,
        column,
        references,
        on_delete: OnDelete::Cascade,
        required: true,
    }
}

const fn weak(table: &'static str, column: &'static str, references: &'static str) -> Relation {
    Relation {
        table,
        column,
        references,
        on_delete: OnDelete::SetNull,
        required: false,
    }
}

/// Every table in the schema, in migration order.
pub const TABLES: &[TableDef] = &[
    TableDef { table: "accounts", entity: "Account" },
    TableDef { table: "countries", entity: "Country" },
    TableDef { table: "global_actors", entity: "GlobalActor" },
    TableDef { table: "users", entity: "User" },
    TableDef { table: "stamp_statuses", entity: "StampStatus" },
    TableDef { table: "user_stamps", entity: "UserStamp" },
    TableDef { table: "authors", entity: "Author" },
    TableDef { table: "universes", entity: "Universe" },
    TableDef { table: "composition_types", entity: "CompositionType" },
    TableDef { table: "sagas", entity: "Saga" },
    TableDef { table: "places", entity: "Place" },
    TableDef { table: "compositions", entity: "Composition" },
    TableDef { table: "events", entity: "Event" },
    TableDef { table: "heroes", entity: "Hero" },
    TableDef { table: "episodes", entity: "Episode" },
    TableDef { table: "role_types", entity: "RoleType" },
    TableDef { table: "participations", entity: "Participation" },
    TableDef { table: "value_dimensions", entity: "ValueDimension" },
    TableDef { table: "fact_types", entity: "FactType" },
    TableDef { table: "facts", entity: "Fact" },
    TableDef { table: "affects_on_values", entity: "AffectOnValue" },
    TableDef { table: "hero_values", entity: "HeroValue" },
    TableDef { table: "decision_types", entity: "DecisionType" },
    TableDef { table: "decisions", entity: "Decision" },
    TableDef { table: "action_types", entity: "ActionType" },
    TableDef { table: "hero_actions", entity: "HeroAction" },
    TableDef { table: "decision_evaluations", entity: "DecisionEvaluation" },
    TableDef { table: "event_sequences", entity: "EventSequence" },
    TableDef { table: "fact_relations", entity: "FactRelation" },
];

/// Every foreign key in the schema.
pub const RELATIONS: &[Relation] = &[
    // People and stamps
    owned("users", "account_id", "accounts"),
    weak("users", "country_id", "countries"),
    weak("users", "gla_id", "global_actors"),
    weak("global_actors", "registered_by_user_id", "users"),
    owned("user_stamps", "user_id", "users"),
    weak("user_stamps", "status_id", "stamp_statuses"),
    weak("authors", "country_of_birth_id", "countries"),
    weak("authors", "gla_id", "global_actors"),
    // Narrative catalog
    weak("sagas", "universe_id", "universes"),
    weak("sagas", "country_first_published_id", "countries"),
    weak("sagas", "author_id", "authors"),
    weak("sagas", "user_stamp_id", "user_stamps"),
    weak("places", "parent_id", "places"),
    owned("compositions", "saga_id", "sagas"),
    weak("compositions", "composition_type_id", "composition_types"),
    weak("events", "place_id", "places"),
    weak("events", "composition_id", "compositions"),
    weak("events", "user_stamp_id", "user_stamps"),
    weak("heroes", "saga_id", "sagas"),
    weak("heroes", "birth_event_id", "events"),
    weak("heroes", "user_stamp_id", "user_stamps"),
    weak("heroes", "gla_id", "global_actors"),
    owned("episodes", "composition_id", "compositions"),
    weak("episodes", "start_event_id", "events"),
    weak("episodes", "previous_episode_id", "episodes"),
    weak("episodes", "user_stamp_id", "user_stamps"),
    owned("participations", "hero_id", "heroes"),
    owned("participations", "episode_id", "episodes"),
    weak("participations", "role_type_id", "role_types"),
    // Values and facts
    weak("value_dimensions", "user_stamp_id", "user_stamps"),
    owned("facts", "composition_id", "compositions"),
    weak("facts", "fact_type_id", "fact_types"),
    weak("facts", "result_of_event_id", "events"),
    owned("affects_on_values", "value_dimension_id", "value_dimensions"),
    owned("affects_on_values", "fact_type_id", "fact_types"),
    owned("hero_values", "hero_id", "heroes"),
    owned("hero_values", "value_dimension_id", "value_dimensions"),
    weak("hero_values", "event_after_id", "events"),
    // Decisions and actions
    weak("decision_types", "user_stamp_id", "user_stamps"),
    weak("decisions", "decision_type_id", "decision_types"),
    owned("decisions", "hero_id", "heroes"),
    weak("decisions", "event_after_id", "events"),
    weak("action_types", "user_stamp_id", "user_stamps"),
    owned("hero_actions", "hero_id", "heroes"),
    weak("hero_actions", "action_type_id", "action_types"),
    weak("hero_actions", "based_on_decision_id", "decisions"),
    weak("hero_actions", "cause_event_id", "events"),
    weak("hero_actions", "in_role_id", "participations"),
    owned("decision_evaluations", "hero_id", "heroes"),
    owned("decision_evaluations", "hero_action_id", "hero_actions"),
    weak("decision_evaluations", "evaluator_gla_id", "global_actors"),
    weak("decision_evaluations", "event_after_id", "events"),
    weak("decision_evaluations", "value_dimension_id", "value_dimensions"),
    // Graph edges
    owned("event_sequences", "event_before_id", "events"),
    owned("event_sequences", "event_after_id", "events"),
    owned("fact_relations", "based_fact_id", "facts"),
    owned("fact_relations", "followed_fact_id", "facts"),
    weak("fact_relations", "event_relation_id", "events"),
];

/// The three edge tables that reject duplicate pairs.
pub const UNIQUE_PAIRS: &[UniquePair] = &[
    UniquePair {
        table: "affects_on_values",
        columns: ["value_dimension_id", "fact_type_id"],
        constraint: "uq_affects_on_values_pair",
    },
    UniquePair {
        table: "event_sequences",
        columns: ["event_before_id", "event_after_id"],
        constraint: "uq_event_sequences_pair",
    },
    UniquePair {
        table: "fact_relations",
        columns: ["based_fact_id", "followed_fact_id"],
        constraint: "uq_fact_relations_pair",
    },
];

/// Look up a table by name.
pub fn table(name: &str) -> Option<&'static TableDef> {
    TABLES.iter().find(|t| t.table == name)
}

/// Relations whose referenced table is `table`, i.e. the foreign keys that
/// react when a row of `table` is deleted.
pub fn referencing(table: &str) -> impl Iterator<Item = &'static Relation> + '_ {
    RELATIONS.iter().filter(move |r| r.references == table)
}

/// The serializable view of the whole catalog.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub tables: &'static [TableDef],
    pub relations: &'static [Relation],
    pub unique_pairs: &'static [UniquePair],
}

/// The catalog as a single value.
pub fn catalog() -> Catalog {
    Catalog {
        tables: TABLES,
        relations: RELATIONS,
        unique_pairs: UNIQUE_PAIRS,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn cascade_columns_are_required_and_set_null_columns_optional() {
        for r in RELATIONS {
            match r.on_delete {
                OnDelete::Cascade => assert!(r.required, "{}.{} cascades but is optional", r.table, r.column),
                OnDelete::SetNull => assert!(!r.required, "{}.{} is set-null but required", r.table, r.column),
            }
        }
    }

    #[test]
    fn every_relation_endpoint_is_a_known_table() {
        for r in RELATIONS {
            assert!(table(r.table).is_some(), "unknown table {}", r.table);
            assert!(table(r.references).is_some(), "unknown referenced table {}", r.references);
        }
    }

    #[test]
    fn relations_are_not_duplicated() {
        let mut seen = HashSet::new();
        for r in RELATIONS {
            assert!(seen.insert((r.table, r.column)), "duplicate {}.{}", r.table, r.column);
        }
    }

    #[test]
    fn unique_pairs_cover_owned_relations() {
        for pair in UNIQUE_PAIRS {
            for column in pair.columns {
                let relation = RELATIONS
                    .iter()
                    .find(|r| r.table == pair.table && r.column == column)
                    .unwrap_or_else(|| panic!("{}.{} is not a relation", pair.table, column));
                assert_eq!(relation.on_delete, OnDelete::Cascade);
            }
            assert!(pair.constraint.starts_with("uq_"));
        }
    }

    #[test]
    fn self_references_are_set_null() {
        let self_refs: Vec<_> = RELATIONS.iter().filter(|r| r.table == r.references).collect();
        assert_eq!(self_refs.len(), 2);
        assert!(self_refs.iter().all(|r| r.on_delete == OnDelete::SetNull));
    }

    #[test]
    fn referencing_compositions_lists_children() {
        let cols: Vec<_> = referencing("compositions").map(|r| (r.table, r.column)).collect();
        assert!(cols.contains(&("episodes", "composition_id")));
        assert!(cols.contains(&("facts", "composition_id")));
        assert!(cols.contains(&("events", "composition_id")));
    }

    #[test]
    fn on_delete_round_trips_through_sql_rule() {
        assert_eq!(OnDelete::from_sql(OnDelete::Cascade.as_sql()), Some(OnDelete::Cascade));
        assert_eq!(OnDelete::from_sql(OnDelete::SetNull.as_sql()), Some(OnDelete::SetNull));
        assert_eq!(OnDelete::from_sql("RESTRICT"), None);
    }
}
