//! HTTP-level integration tests for the catalog CRUD endpoints, the inline
//! (nested) collections and the delete preview.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_id, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;
use storyverse_core::schema::{RELATIONS, TABLES};

// ---------------------------------------------------------------------------
// Plain CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_universe_crud_cycle(pool: PgPool) {
    let token = common::staff_token(&pool).await;

    // Create
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/universes",
        json!({ "name": "Middle-earth" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Middle-earth");

    // Read
    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/universes/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Middle-earth");

    // List with a search term
    create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/universes",
        json!({ "name": "Discworld" }),
        &token,
    )
    .await;
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/universes?q=middle",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], id);

    // Update
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/universes/{id}"),
        json!({ "name": "Arda" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Arda");
    assert_eq!(updated["id"], id);

    // Delete, then gone
    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/universes/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/universes/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/universes/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_is_404(pool: PgPool) {
    let token = common::staff_token(&pool).await;

    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/v1/countries/999999",
        json!({ "name": "Gondor" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Validation and constraint mapping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_name_is_validation_error(pool: PgPool) {
    let token = common::staff_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/universes",
        json!({ "name": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_field_is_422(pool: PgPool) {
    let token = common::staff_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/compositions",
        json!({ "title": "The Hobbit" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dangling_reference_is_invalid_reference(pool: PgPool) {
    let token = common::staff_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/compositions",
        json!({ "saga_id": 424242, "title": "The Hobbit" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_evaluation_weight_out_of_range(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let hero_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/heroes",
        json!({ "name": "Bilbo" }),
        &token,
    )
    .await;
    let action_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/hero-actions",
        json!({ "hero_id": hero_id }),
        &token,
    )
    .await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/decision-evaluations",
        json!({ "hero_id": hero_id, "hero_action_id": action_id, "weight": 1.5 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/decision-evaluations",
        json!({ "hero_id": hero_id, "hero_action_id": action_id, "weight": -1.0 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_event_sequence_is_conflict(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let before = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/events",
        json!({ "title": "Unexpected party" }),
        &token,
    )
    .await;
    let after = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/events",
        json!({ "title": "Troll encounter" }),
        &token,
    )
    .await;
    let edge = json!({ "event_before_id": before, "event_after_id": after, "straight": true });

    create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/event-sequences",
        edge.clone(),
        &token,
    )
    .await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/event-sequences",
        edge,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The reverse edge is a different ordered pair.
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/event-sequences",
        json!({ "event_before_id": after, "event_after_id": before }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_affect_on_value_is_conflict(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let greed = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/value-dimensions",
        json!({ "title": "Greed" }),
        &token,
    )
    .await;
    let hoard = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/fact-types",
        json!({ "title": "Hoard size", "is_numerical": true, "measure": "chests" }),
        &token,
    )
    .await;
    let pair = json!({ "value_dimension_id": greed, "fact_type_id": hoard, "weight": 0.7 });

    create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/affects-on-values",
        pair,
        &token,
    )
    .await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/affects-on-values",
        json!({ "value_dimension_id": greed, "fact_type_id": hoard, "weight": -0.2 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("uq_affects_on_values_pair"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_fact_relation_is_conflict(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let (composition_id, _) = seed_episode(&pool, &token).await;
    let based = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/facts",
        json!({ "composition_id": composition_id, "title": "Arkenstone hidden" }),
        &token,
    )
    .await;
    let followed = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/facts",
        json!({ "composition_id": composition_id, "title": "Siege of Erebor" }),
        &token,
    )
    .await;
    let uri = format!("/api/v1/facts/{based}/relations");

    create_id(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "followed_fact_id": followed }),
        &token,
    )
    .await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "followed_fact_id": followed, "group_id": "other" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The flat route maps the same constraint.
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/fact-relations",
        json!({ "based_fact_id": based, "followed_fact_id": followed }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_list_filters_by_saga(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let saga_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/sagas",
        json!({ "name": "The Lord of the Rings" }),
        &token,
    )
    .await;
    let frodo = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/heroes",
        json!({ "name": "Frodo", "saga_id": saga_id }),
        &token,
    )
    .await;
    create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/heroes",
        json!({ "name": "Rincewind" }),
        &token,
    )
    .await;

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/heroes?saga_id={saga_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], frodo);
}

// ---------------------------------------------------------------------------
// Inline collections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hero_values_inline(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let hero_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/heroes",
        json!({ "name": "Sam" }),
        &token,
    )
    .await;
    let other_hero = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/heroes",
        json!({ "name": "Gollum" }),
        &token,
    )
    .await;
    let loyalty = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/value-dimensions",
        json!({ "title": "Loyalty" }),
        &token,
    )
    .await;

    // The path decides the owner, whatever the body says.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/heroes/{hero_id}/values"),
        json!({ "hero_id": other_hero, "value_dimension_id": loyalty, "weight": 0.9 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["hero_id"], hero_id);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/heroes/{hero_id}/values"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/heroes/{hero_id}/detail"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Sam");
    assert_eq!(json["data"]["values"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["values"][0]["value_dimension_id"], loyalty);
    assert!(json["data"]["actions"].as_array().unwrap().is_empty());
    assert!(json["data"]["decisions"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inline_create_without_parent_in_body(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let hero_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/heroes",
        json!({ "name": "Aragorn" }),
        &token,
    )
    .await;
    let courage = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/value-dimensions",
        json!({ "title": "Courage" }),
        &token,
    )
    .await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/heroes/{hero_id}/values"),
        json!({ "value_dimension_id": courage, "weight": 0.5 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["hero_id"], hero_id);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/heroes/{hero_id}/actions"),
        json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["hero_id"], hero_id);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/heroes/{hero_id}/decisions"),
        json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["hero_id"], hero_id);

    // The flat route still needs the owner.
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/hero-values",
        json!({ "value_dimension_id": courage, "weight": 0.5 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required value: hero_id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inline_collection_of_missing_parent_is_404(pool: PgPool) {
    let token = common::staff_token(&pool).await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/heroes/999999/values",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/heroes/999999/detail",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Build saga → composition → episode and return `(composition_id, episode_id)`.
async fn seed_episode(pool: &PgPool, token: &str) -> (i64, i64) {
    let saga_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/sagas",
        json!({ "name": "The Hobbit" }),
        token,
    )
    .await;
    let composition_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/compositions",
        json!({ "saga_id": saga_id, "title": "There and Back Again" }),
        token,
    )
    .await;
    let episode_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/episodes",
        json!({
            "composition_id": composition_id,
            "title": "An Unexpected Party",
            "story_resume": "Dwarves arrive at Bag End.",
        }),
        token,
    )
    .await;
    (composition_id, episode_id)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_episode_participations_inline(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let (_, episode_id) = seed_episode(&pool, &token).await;
    let hero_id = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/heroes",
        json!({ "name": "Thorin" }),
        &token,
    )
    .await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/episodes/{episode_id}/participations"),
        json!({ "hero_id": hero_id }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["episode_id"], episode_id);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/episodes/{episode_id}/detail"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "An Unexpected Party");
    assert_eq!(json["data"]["participations"][0]["hero_id"], hero_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fact_relations_inline(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let (composition_id, _) = seed_episode(&pool, &token).await;
    let ring_found = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/facts",
        json!({ "composition_id": composition_id, "title": "Ring found" }),
        &token,
    )
    .await;
    let ring_kept = create_id(
        common::build_test_app(pool.clone()),
        "/api/v1/facts",
        json!({ "composition_id": composition_id, "title": "Ring kept" }),
        &token,
    )
    .await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/facts/{ring_found}/relations"),
        json!({ "followed_fact_id": ring_kept, "group_id": "ring" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["based_fact_id"], ring_found);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/facts/{ring_found}/relations"),
        &token,
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    // The followed side does not own the relation.
    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/facts/{ring_kept}/detail"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert!(json["data"]["relations"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Delete preview and schema
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_saga_delete_preview_lists_cascade(pool: PgPool) {
    let token = common::staff_token(&pool).await;
    let (composition_id, _) = seed_episode(&pool, &token).await;
    let saga_id = body_json(
        get_auth(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/compositions/{composition_id}"),
            &token,
        )
        .await,
    )
    .await["saga_id"]
        .as_i64()
        .unwrap();

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/sagas/{saga_id}/delete-preview"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["root_table"], "sagas");
    assert_eq!(json["data"]["root_id"], saga_id);

    let cascaded = json["data"]["cascaded"].as_array().unwrap();
    let count_for = |table: &str| {
        cascaded
            .iter()
            .find(|c| c["table"] == table)
            .map(|c| c["count"].as_i64().unwrap())
    };
    assert_eq!(count_for("compositions"), Some(1));
    assert_eq!(count_for("episodes"), Some(1));

    // Previewing does not delete anything.
    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/sagas/{saga_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_preview_of_missing_row_is_404(pool: PgPool) {
    let token = common::staff_token(&pool).await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/heroes/999999/delete-preview",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schema_catalog(pool: PgPool) {
    let token = common::staff_token(&pool).await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/schema", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["tables"].as_array().unwrap().len(), TABLES.len());
    assert_eq!(
        json["data"]["relations"].as_array().unwrap().len(),
        RELATIONS.len()
    );
}
