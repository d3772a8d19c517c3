//! Integration tests for the catalog repositories.
//!
//! Exercises the repository layer against a real database:
//! - CRUD round trips and the `updated_at` trigger
//! - Cascading deletes along ownership chains
//! - Set-null on weak references
//! - Uniqueness of the three edge tables
//! - Required references and self-referencing chains
//! - Admin search and list filters

mod common;

use assert_matches::assert_matches;
use common::*;
use sqlx::PgPool;
use storyverse_db::models::decision::{CreateDecision, CreateDecisionEvaluation, CreateHeroAction};
use storyverse_db::models::episode::UpdateEpisode;
use storyverse_db::models::fact::{CreateAffectOnValue, CreateFactRelation};
use storyverse_db::models::hero::{CreateHeroValue, HeroListParams};
use storyverse_db::models::lookup::CreateUniverse;
use storyverse_db::models::person::{UserListParams, UserStampListParams};
use storyverse_db::models::place::{CreateEventSequence, PlaceListParams};
use storyverse_db::models::saga::SagaListParams;
use storyverse_db::models::{PageParams, SearchParams};
use storyverse_db::repositories::*;

fn search(q: &str) -> SearchParams {
    SearchParams {
        q: Some(q.to_string()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_universe_crud(pool: PgPool) {
    let created = UniverseRepo::create(&pool, &CreateUniverse { name: "Arda".into() })
        .await
        .unwrap();
    assert_eq!(created.name, "Arda");

    let found = UniverseRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    let updated = UniverseRepo::update(&pool, created.id, &CreateUniverse { name: "Middle-earth".into() })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Middle-earth");

    let listed = UniverseRepo::list(&pool, &SearchParams::default()).await.unwrap();
    assert_eq!(listed.len(), 1);

    assert!(UniverseRepo::delete(&pool, created.id).await.unwrap());
    assert!(!UniverseRepo::delete(&pool, created.id).await.unwrap());
    assert!(UniverseRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = UniverseRepo::update(&pool, 999_999, &CreateUniverse { name: "Nowhere".into() })
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger_advances(pool: PgPool) {
    let saga = seed_saga(&pool, "The Lord of the Rings").await;
    let mut input = new_saga("The Lord of the Rings");
    input.zero_event_abbreviature = Some("TA".into());

    let updated = SagaRepo::update(&pool, saga.id, &input).await.unwrap().unwrap();
    assert_eq!(updated.zero_event_abbreviature.as_deref(), Some("TA"));
    assert!(updated.updated_at >= saga.updated_at);
    assert_eq!(updated.created_at, saga.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_leaves_photo_untouched(pool: PgPool) {
    let hero = seed_hero(&pool, "Frodo", None).await;
    HeroRepo::set_photo(&pool, hero.id, Some("heroes/1_frodo.png"))
        .await
        .unwrap()
        .unwrap();

    let mut input = new_hero("Frodo Baggins", None);
    input.description = "Ring-bearer".into();
    let updated = HeroRepo::update(&pool, hero.id, &input).await.unwrap().unwrap();
    assert_eq!(updated.name, "Frodo Baggins");
    assert_eq!(updated.photo_file.as_deref(), Some("heroes/1_frodo.png"));

    let cleared = HeroRepo::set_photo(&pool, hero.id, None).await.unwrap().unwrap();
    assert!(cleared.photo_file.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_clears_optional_reference(pool: PgPool) {
    let saga = seed_saga(&pool, "Saga").await;
    let hero = seed_hero(&pool, "Sam", Some(saga.id)).await;
    assert_eq!(hero.saga_id, Some(saga.id));

    let updated = HeroRepo::update(&pool, hero.id, &new_hero("Sam", None))
        .await
        .unwrap()
        .unwrap();
    assert!(updated.saga_id.is_none());
}

// ---------------------------------------------------------------------------
// Required references
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_without_saga_is_accepted(pool: PgPool) {
    let hero = seed_hero(&pool, "Tom Bombadil", None).await;
    assert!(hero.saga_id.is_none());
    assert!(hero.birth_event_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_composition_with_unknown_saga_is_rejected(pool: PgPool) {
    let err = CompositionRepo::create(&pool, &new_composition(999_999, "Orphan"))
        .await
        .unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_evaluation_weight_out_of_range_is_rejected(pool: PgPool) {
    let hero = seed_hero(&pool, "Boromir", None).await;
    let action = HeroActionRepo::create(
        &pool,
        &CreateHeroAction {
            hero_id: Some(hero.id),
            action_type_id: None,
            based_on_decision_id: None,
            cause_event_id: None,
            in_role_id: None,
        },
    )
    .await
    .unwrap();

    let mut input = CreateDecisionEvaluation {
        hero_id: hero.id,
        hero_action_id: action.id,
        evaluator_gla_id: None,
        event_after_id: None,
        value_dimension_id: None,
        weight: 1.5,
    };
    let err = DecisionEvaluationRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23514"));

    input.weight = -1.0;
    let evaluation = DecisionEvaluationRepo::create(&pool, &input).await.unwrap();
    assert_eq!(evaluation.weight, -1.0);
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_saga_delete_cascades_transitively(pool: PgPool) {
    let saga = seed_saga(&pool, "The Hobbit").await;
    let composition = seed_composition(&pool, saga.id, "There and Back Again").await;
    let episode = seed_episode(&pool, composition.id, "An Unexpected Party", None).await;
    let hero = seed_hero(&pool, "Bilbo", Some(saga.id)).await;
    let participation = seed_participation(&pool, hero.id, episode.id).await;
    let fact_a = seed_fact(&pool, composition.id, "Ring found").await;
    let fact_b = seed_fact(&pool, composition.id, "Smaug slain").await;
    let relation = FactRelationRepo::create(
        &pool,
        &CreateFactRelation {
            based_fact_id: Some(fact_a.id),
            followed_fact_id: fact_b.id,
            group_id: String::new(),
            event_relation_id: None,
        },
    )
    .await
    .unwrap();

    assert!(SagaRepo::delete(&pool, saga.id).await.unwrap());

    assert!(CompositionRepo::find_by_id(&pool, composition.id).await.unwrap().is_none());
    assert!(EpisodeRepo::find_by_id(&pool, episode.id).await.unwrap().is_none());
    assert!(ParticipationRepo::find_by_id(&pool, participation.id).await.unwrap().is_none());
    assert!(FactRepo::find_by_id(&pool, fact_a.id).await.unwrap().is_none());
    assert!(FactRelationRepo::find_by_id(&pool, relation.id).await.unwrap().is_none());

    // The hero is only weakly attached to the saga.
    let hero = HeroRepo::find_by_id(&pool, hero.id).await.unwrap().unwrap();
    assert!(hero.saga_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_delete_cascades_to_owned_rows(pool: PgPool) {
    let hero = seed_hero(&pool, "Gollum", None).await;
    let dimension = seed_value_dimension(&pool, "Loyalty").await;
    let value = HeroValueRepo::create(
        &pool,
        &CreateHeroValue {
            hero_id: Some(hero.id),
            value_dimension_id: dimension.id,
            weight: 0.2,
            event_after_id: None,
        },
    )
    .await
    .unwrap();
    let decision = DecisionRepo::create(
        &pool,
        &CreateDecision {
            decision_type_id: None,
            hero_id: Some(hero.id),
            event_after_id: None,
        },
    )
    .await
    .unwrap();
    let action = HeroActionRepo::create(
        &pool,
        &CreateHeroAction {
            hero_id: Some(hero.id),
            action_type_id: None,
            based_on_decision_id: Some(decision.id),
            cause_event_id: None,
            in_role_id: None,
        },
    )
    .await
    .unwrap();

    assert!(HeroRepo::delete(&pool, hero.id).await.unwrap());

    assert!(HeroValueRepo::find_by_id(&pool, value.id).await.unwrap().is_none());
    assert!(DecisionRepo::find_by_id(&pool, decision.id).await.unwrap().is_none());
    assert!(HeroActionRepo::find_by_id(&pool, action.id).await.unwrap().is_none());
    assert!(ValueDimensionRepo::find_by_id(&pool, dimension.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_delete_cascades_to_user_and_stamps(pool: PgPool) {
    let user = seed_user(&pool, "curator").await;
    let stamp = seed_stamp(&pool, user.id).await;
    let mut input = new_hero("Aragorn", None);
    input.user_stamp_id = Some(stamp.id);
    let hero = HeroRepo::create(&pool, &input).await.unwrap();

    sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(user.account_id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
    assert!(UserStampRepo::find_by_id(&pool, stamp.id).await.unwrap().is_none());
    let hero = HeroRepo::find_by_id(&pool, hero.id).await.unwrap().unwrap();
    assert!(hero.user_stamp_id.is_none());
}

// ---------------------------------------------------------------------------
// Set-null
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_delete_clears_references(pool: PgPool) {
    let event = seed_event(&pool, "Birth of Frodo").await;
    let other = seed_event(&pool, "Party").await;
    let saga = seed_saga(&pool, "Saga").await;
    let composition = seed_composition(&pool, saga.id, "Book").await;

    let mut hero_input = new_hero("Frodo", None);
    hero_input.birth_event_id = Some(event.id);
    let hero = HeroRepo::create(&pool, &hero_input).await.unwrap();

    let mut episode_input = new_episode(composition.id, "Chapter 1", None);
    episode_input.start_event_id = Some(event.id);
    let episode = EpisodeRepo::create(&pool, &episode_input).await.unwrap();

    let sequence = EventSequenceRepo::create(
        &pool,
        &CreateEventSequence {
            event_before_id: event.id,
            event_after_id: other.id,
            straight: true,
        },
    )
    .await
    .unwrap();

    assert!(EventRepo::delete(&pool, event.id).await.unwrap());

    let hero = HeroRepo::find_by_id(&pool, hero.id).await.unwrap().unwrap();
    assert!(hero.birth_event_id.is_none());
    let episode = EpisodeRepo::find_by_id(&pool, episode.id).await.unwrap().unwrap();
    assert!(episode.start_event_id.is_none());
    // Sequence edges are owned by both endpoints.
    assert!(EventSequenceRepo::find_by_id(&pool, sequence.id).await.unwrap().is_none());
    assert!(EventRepo::find_by_id(&pool, other.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_participation_delete_clears_action_role(pool: PgPool) {
    let saga = seed_saga(&pool, "Saga").await;
    let composition = seed_composition(&pool, saga.id, "Book").await;
    let episode = seed_episode(&pool, composition.id, "Chapter", None).await;
    let hero = seed_hero(&pool, "Merry", None).await;
    let participation = seed_participation(&pool, hero.id, episode.id).await;
    let action = HeroActionRepo::create(
        &pool,
        &CreateHeroAction {
            hero_id: Some(hero.id),
            action_type_id: None,
            based_on_decision_id: None,
            cause_event_id: None,
            in_role_id: Some(participation.id),
        },
    )
    .await
    .unwrap();

    assert!(ParticipationRepo::delete(&pool, participation.id).await.unwrap());

    let action = HeroActionRepo::find_by_id(&pool, action.id).await.unwrap().unwrap();
    assert!(action.in_role_id.is_none());
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_affect_on_value_is_rejected(pool: PgPool) {
    let dimension = seed_value_dimension(&pool, "Courage").await;
    let fact_type = seed_fact_type(&pool, "Battle won", false).await;
    let input = CreateAffectOnValue {
        value_dimension_id: dimension.id,
        fact_type_id: fact_type.id,
        weight: 0.5,
    };
    AffectOnValueRepo::create(&pool, &input).await.unwrap();

    let err = AffectOnValueRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(&err, sqlx::Error::Database(db) if db.constraint() == Some("uq_affects_on_values_pair"));
    assert_eq!(db_code(&err).as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_event_sequence_is_rejected(pool: PgPool) {
    let before = seed_event(&pool, "Before").await;
    let after = seed_event(&pool, "After").await;
    let input = CreateEventSequence {
        event_before_id: before.id,
        event_after_id: after.id,
        straight: false,
    };
    EventSequenceRepo::create(&pool, &input).await.unwrap();

    let err = EventSequenceRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23505"));

    // The reverse direction is a different edge.
    let reverse = CreateEventSequence {
        event_before_id: after.id,
        event_after_id: before.id,
        straight: false,
    };
    EventSequenceRepo::create(&pool, &reverse).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_fact_relation_is_rejected(pool: PgPool) {
    let saga = seed_saga(&pool, "Saga").await;
    let composition = seed_composition(&pool, saga.id, "Book").await;
    let based = seed_fact(&pool, composition.id, "Cause").await;
    let followed = seed_fact(&pool, composition.id, "Effect").await;
    let input = CreateFactRelation {
        based_fact_id: Some(based.id),
        followed_fact_id: followed.id,
        group_id: "A".into(),
        event_relation_id: None,
    };
    FactRelationRepo::create(&pool, &input).await.unwrap();

    let mut duplicate = input.clone();
    duplicate.group_id = "B".into();
    let err = FactRelationRepo::create(&pool, &duplicate).await.unwrap_err();
    assert_eq!(db_code(&err).as_deref(), Some("23505"));
}

// ---------------------------------------------------------------------------
// Self-referencing chains
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_place_chain_of_arbitrary_depth(pool: PgPool) {
    let mut parent = None;
    let mut chain = Vec::new();
    for name in ["Arda", "Middle-earth", "Eriador", "The Shire", "Hobbiton", "Bag End"] {
        let place = seed_place(&pool, name, parent).await;
        parent = Some(place.id);
        chain.push(place);
    }
    assert!(chain[0].parent_id.is_none());
    assert_eq!(chain[5].parent_id, Some(chain[4].id));

    // Removing a link detaches the next place without deleting it.
    assert!(PlaceRepo::delete(&pool, chain[2].id).await.unwrap());
    let shire = PlaceRepo::find_by_id(&pool, chain[3].id).await.unwrap().unwrap();
    assert!(shire.parent_id.is_none());
    assert!(PlaceRepo::find_by_id(&pool, chain[5].id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_episode_chain_accepts_cycles(pool: PgPool) {
    let saga = seed_saga(&pool, "Saga").await;
    let composition = seed_composition(&pool, saga.id, "Book").await;
    let first = seed_episode(&pool, composition.id, "One", None).await;
    let second = seed_episode(&pool, composition.id, "Two", Some(first.id)).await;

    let looped: UpdateEpisode = new_episode(composition.id, "One", Some(second.id));
    let first = EpisodeRepo::update(&pool, first.id, &looped).await.unwrap().unwrap();
    assert_eq!(first.previous_episode_id, Some(second.id));

    assert!(EpisodeRepo::delete(&pool, second.id).await.unwrap());
    let first = EpisodeRepo::find_by_id(&pool, first.id).await.unwrap().unwrap();
    assert!(first.previous_episode_id.is_none());
}

// ---------------------------------------------------------------------------
// Search and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_search_requires_every_word(pool: PgPool) {
    seed_hero(&pool, "Frodo Baggins", None).await;
    seed_hero(&pool, "Bilbo Baggins", None).await;
    seed_hero(&pool, "Samwise Gamgee", None).await;

    let params = HeroListParams {
        q: Some("baggins".into()),
        ..Default::default()
    };
    assert_eq!(HeroRepo::list(&pool, &params).await.unwrap().len(), 2);

    let params = HeroListParams {
        q: Some("BAGGINS  frodo".into()),
        ..Default::default()
    };
    let heroes = HeroRepo::list(&pool, &params).await.unwrap();
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].name, "Frodo Baggins");

    let params = HeroListParams {
        q: Some("   ".into()),
        ..Default::default()
    };
    assert_eq!(HeroRepo::list(&pool, &params).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_wildcards_match_literally(pool: PgPool) {
    seed_hero(&pool, "100% Hobbit", None).await;
    seed_hero(&pool, "Hobbit", None).await;

    let params = HeroListParams {
        q: Some("%".into()),
        ..Default::default()
    };
    let heroes = HeroRepo::list(&pool, &params).await.unwrap();
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].name, "100% Hobbit");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filters_combine_with_search(pool: PgPool) {
    let shire = seed_saga(&pool, "Shire tales").await;
    let gondor = seed_saga(&pool, "Gondor tales").await;
    seed_hero(&pool, "Pippin", Some(shire.id)).await;
    seed_hero(&pool, "Peregrin", Some(gondor.id)).await;
    seed_hero(&pool, "Faramir", Some(gondor.id)).await;

    let params = HeroListParams {
        q: Some("pe".into()),
        saga_id: Some(gondor.id),
        ..Default::default()
    };
    let heroes = HeroRepo::list(&pool, &params).await.unwrap();
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].name, "Peregrin");

    let sagas = SagaRepo::list(
        &pool,
        &SagaListParams {
            q: Some("tales".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(sagas.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_place_real_flag_filter(pool: PgPool) {
    let mut real = new_place("Oxford", None);
    real.real_flag = true;
    PlaceRepo::create(&pool, &real).await.unwrap();
    seed_place(&pool, "Rivendell", None).await;

    let params = PlaceListParams {
        real_flag: Some(true),
        ..Default::default()
    };
    let places = PlaceRepo::list(&pool, &params).await.unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].name, "Oxford");

    let all = PlaceRepo::list(&pool, &PlaceListParams::default()).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_participation_search_spans_hero_and_episode(pool: PgPool) {
    let saga = seed_saga(&pool, "Saga").await;
    let composition = seed_composition(&pool, saga.id, "Book").await;
    let council = seed_episode(&pool, composition.id, "The Council of Elrond", None).await;
    let mirror = seed_episode(&pool, composition.id, "The Mirror of Galadriel", None).await;
    let frodo = seed_hero(&pool, "Frodo", None).await;
    let sam = seed_hero(&pool, "Sam", None).await;
    seed_participation(&pool, frodo.id, council.id).await;
    seed_participation(&pool, sam.id, mirror.id).await;
    seed_participation(&pool, frodo.id, mirror.id).await;

    // One word matches the hero, the other the episode.
    let found = ParticipationRepo::list(&pool, &search("frodo mirror")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].hero_id, frodo.id);
    assert_eq!(found[0].episode_id, mirror.id);

    let found = ParticipationRepo::list(&pool, &search("frodo")).await.unwrap();
    assert_eq!(found.len(), 2);

    let found = ParticipationRepo::list(&pool, &SearchParams::default()).await.unwrap();
    assert_eq!(found.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_and_stamp_search_by_username(pool: PgPool) {
    let tolkien = seed_user(&pool, "jrr_tolkien").await;
    let lewis = seed_user(&pool, "cs_lewis").await;
    seed_stamp(&pool, tolkien.id).await;
    seed_stamp(&pool, lewis.id).await;
    seed_stamp(&pool, lewis.id).await;

    let users = UserRepo::list(
        &pool,
        &UserListParams {
            q: Some("tolkien".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, tolkien.id);

    let stamps = UserStampRepo::list(
        &pool,
        &UserStampListParams {
            q: Some("lewis".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(stamps.len(), 2);
    assert!(stamps.iter().all(|s| s.user_id == lewis.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination(pool: PgPool) {
    for i in 0..5 {
        seed_event(&pool, &format!("Event {i}")).await;
    }

    let page = EventSequenceRepo::list(&pool, &PageParams::default()).await.unwrap();
    assert!(page.is_empty());

    let params = storyverse_db::models::place::EventListParams {
        limit: Some(2),
        offset: Some(3),
        ..Default::default()
    };
    let events = EventRepo::list(&pool, &params).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Event 3");
    assert_eq!(events[1].title, "Event 4");

    // Out-of-range values are clamped rather than rejected.
    let params = storyverse_db::models::place::EventListParams {
        limit: Some(0),
        offset: Some(-10),
        ..Default::default()
    };
    let events = EventRepo::list(&pool, &params).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Event 0");
}

// ---------------------------------------------------------------------------
// Detail views
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_detail_collects_inline_rows(pool: PgPool) {
    let hero = seed_hero(&pool, "Eowyn", None).await;
    let other = seed_hero(&pool, "Eomer", None).await;
    let dimension = seed_value_dimension(&pool, "Duty").await;
    for target in [hero.id, other.id] {
        HeroValueRepo::create(
            &pool,
            &CreateHeroValue {
                hero_id: Some(target),
                value_dimension_id: dimension.id,
                weight: 0.9,
                event_after_id: None,
            },
        )
        .await
        .unwrap();
    }
    DecisionRepo::create(
        &pool,
        &CreateDecision {
            decision_type_id: None,
            hero_id: Some(hero.id),
            event_after_id: None,
        },
    )
    .await
    .unwrap();

    let detail = HeroRepo::find_detail(&pool, hero.id).await.unwrap().unwrap();
    assert_eq!(detail.hero.id, hero.id);
    assert_eq!(detail.values.len(), 1);
    assert_eq!(detail.decisions.len(), 1);
    assert!(detail.actions.is_empty());

    assert!(HeroRepo::find_detail(&pool, 999_999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_activation_and_search(pool: PgPool) {
    let bilbo = seed_user(&pool, "bilbo").await;
    seed_user(&pool, "frodo").await;

    let found = AccountRepo::list(&pool, &search("bil")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, bilbo.account_id);
    assert!(found[0].is_active);

    let disabled = AccountRepo::set_active(&pool, bilbo.account_id, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!disabled.is_active);
    assert!(AccountRepo::set_active(&pool, 999_999, false)
        .await
        .unwrap()
        .is_none());

    assert!(AccountRepo::delete(&pool, bilbo.account_id).await.unwrap());
    assert!(UserRepo::find_by_id(&pool, bilbo.id).await.unwrap().is_none());
    assert!(!AccountRepo::delete(&pool, bilbo.account_id).await.unwrap());
}
