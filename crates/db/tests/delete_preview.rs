//! Integration tests for the delete preview.
//!
//! Every preview is checked against what the real delete then removes.

mod common;

use common::*;
use sqlx::PgPool;
use storyverse_db::models::deletion::{ColumnCount, TableCount};
use storyverse_db::models::fact::CreateFactRelation;
use storyverse_db::repositories::{DeletionRepo, FactRelationRepo, HeroRepo, SagaRepo};

async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preview_missing_row_is_none(pool: PgPool) {
    assert!(DeletionRepo::preview(&pool, "heroes", 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preview_unknown_table_is_none(pool: PgPool) {
    let hero = seed_hero(&pool, "Frodo", None).await;
    assert!(DeletionRepo::preview(&pool, "not_a_table", hero.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preview_leaf_row_has_no_effects(pool: PgPool) {
    let hero = seed_hero(&pool, "Frodo", None).await;
    let preview = DeletionRepo::preview(&pool, "heroes", hero.id).await.unwrap().unwrap();

    assert_eq!(preview.root_table, "heroes");
    assert_eq!(preview.root_id, hero.id);
    assert!(preview.cascaded.is_empty());
    assert!(preview.nullified.is_empty());
    assert_eq!(preview.total_deleted(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preview_saga_matches_real_delete(pool: PgPool) {
    let saga = seed_saga(&pool, "The Hobbit").await;
    let composition = seed_composition(&pool, saga.id, "There and Back Again").await;
    let first = seed_episode(&pool, composition.id, "One", None).await;
    let second = seed_episode(&pool, composition.id, "Two", Some(first.id)).await;
    let bilbo = seed_hero(&pool, "Bilbo", Some(saga.id)).await;
    let thorin = seed_hero(&pool, "Thorin", Some(saga.id)).await;
    seed_participation(&pool, bilbo.id, first.id).await;
    seed_participation(&pool, thorin.id, second.id).await;
    let fact_a = seed_fact(&pool, composition.id, "Ring found").await;
    let fact_b = seed_fact(&pool, composition.id, "Dragon slain").await;
    FactRelationRepo::create(
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

    let preview = DeletionRepo::preview(&pool, "sagas", saga.id).await.unwrap().unwrap();

    assert_eq!(
        preview.cascaded,
        vec![
            TableCount { table: "compositions", count: 1 },
            TableCount { table: "episodes", count: 2 },
            TableCount { table: "fact_relations", count: 1 },
            TableCount { table: "facts", count: 2 },
            TableCount { table: "participations", count: 2 },
        ]
    );
    // Episode two points at episode one, but both are deleted: not counted.
    assert_eq!(
        preview.nullified,
        vec![ColumnCount { table: "heroes", column: "saga_id", count: 2 }]
    );

    let before: i64 = count(&pool, "compositions").await
        + count(&pool, "episodes").await
        + count(&pool, "facts").await
        + count(&pool, "fact_relations").await
        + count(&pool, "participations").await;
    assert!(SagaRepo::delete(&pool, saga.id).await.unwrap());
    let after: i64 = count(&pool, "compositions").await
        + count(&pool, "episodes").await
        + count(&pool, "facts").await
        + count(&pool, "fact_relations").await
        + count(&pool, "participations").await;
    assert_eq!(before - after, preview.total_deleted() - 1);

    let heroes = count(&pool, "heroes").await;
    assert_eq!(heroes, 2);
    let bilbo = HeroRepo::find_by_id(&pool, bilbo.id).await.unwrap().unwrap();
    assert!(bilbo.saga_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preview_self_reference_counts_survivors(pool: PgPool) {
    let root = seed_place(&pool, "Middle-earth", None).await;
    seed_place(&pool, "Eriador", Some(root.id)).await;
    seed_place(&pool, "Rhovanion", Some(root.id)).await;

    let preview = DeletionRepo::preview(&pool, "places", root.id).await.unwrap().unwrap();
    assert!(preview.cascaded.is_empty());
    assert_eq!(
        preview.nullified,
        vec![ColumnCount { table: "places", column: "parent_id", count: 2 }]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preview_user_cascades_through_stamps(pool: PgPool) {
    let user = seed_user(&pool, "curator").await;
    let stamp = seed_stamp(&pool, user.id).await;
    let mut input = new_hero("Aragorn", None);
    input.user_stamp_id = Some(stamp.id);
    HeroRepo::create(&pool, &input).await.unwrap();

    let preview = DeletionRepo::preview(&pool, "accounts", user.account_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        preview.cascaded,
        vec![
            TableCount { table: "user_stamps", count: 1 },
            TableCount { table: "users", count: 1 },
        ]
    );
    assert_eq!(
        preview.nullified,
        vec![ColumnCount { table: "heroes", column: "user_stamp_id", count: 1 }]
    );
}
