//! Fixtures shared by the db integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use storyverse_db::models::account::CreateAccount;
use storyverse_db::models::episode::{CreateEpisode, CreateParticipation, Episode, Participation};
use storyverse_db::models::fact::{
    CreateFact, CreateFactType, CreateValueDimension, Fact, FactType, ValueDimension,
};
use storyverse_db::models::hero::{CreateHero, Hero};
use storyverse_db::models::person::{CreateUser, CreateUserStamp, User, UserStamp};
use storyverse_db::models::place::{CreateEvent, CreatePlace, Event, Place};
use storyverse_db::models::saga::{Composition, CreateComposition, CreateSaga, Saga};
use storyverse_db::repositories::{
    AccountRepo, CompositionRepo, EpisodeRepo, EventRepo, FactRepo, FactTypeRepo, HeroRepo,
    ParticipationRepo, PlaceRepo, SagaRepo, UserRepo, UserStampRepo, ValueDimensionRepo,
};

/// The SQLSTATE of a database error, if `err` is one.
pub fn db_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    }
}

pub async fn seed_user(pool: &PgPool, username: &str) -> User {
    let account = AccountRepo::create(
        pool,
        &CreateAccount {
            username: username.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            is_staff: true,
        },
    )
    .await
    .unwrap();
    UserRepo::create(
        pool,
        &CreateUser {
            account_id: account.id,
            native_language: "English".to_string(),
            country_id: None,
            gla_id: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_stamp(pool: &PgPool, user_id: i64) -> UserStamp {
    UserStampRepo::create(
        pool,
        &CreateUserStamp {
            user_id,
            stamped_at: Utc::now(),
            status_id: None,
        },
    )
    .await
    .unwrap()
}

pub fn new_saga(name: &str) -> CreateSaga {
    CreateSaga {
        name: name.to_string(),
        universe_id: None,
        zero_event_abbreviature: None,
        date_first_published: NaiveDate::from_ymd_opt(1954, 7, 29),
        country_first_published_id: None,
        author_id: None,
        user_stamp_id: None,
    }
}

pub async fn seed_saga(pool: &PgPool, name: &str) -> Saga {
    SagaRepo::create(pool, &new_saga(name)).await.unwrap()
}

pub fn new_composition(saga_id: i64, title: &str) -> CreateComposition {
    CreateComposition {
        saga_id,
        title: title.to_string(),
        date_published: None,
        composition_type_id: None,
    }
}

pub async fn seed_composition(pool: &PgPool, saga_id: i64, title: &str) -> Composition {
    CompositionRepo::create(pool, &new_composition(saga_id, title))
        .await
        .unwrap()
}

pub fn new_place(name: &str, parent_id: Option<i64>) -> CreatePlace {
    CreatePlace {
        name: name.to_string(),
        parent_id,
        description: String::new(),
        wiki_link: String::new(),
        real_flag: false,
    }
}

pub async fn seed_place(pool: &PgPool, name: &str, parent_id: Option<i64>) -> Place {
    PlaceRepo::create(pool, &new_place(name, parent_id)).await.unwrap()
}

pub fn new_event(title: &str) -> CreateEvent {
    CreateEvent {
        title: title.to_string(),
        place_id: None,
        description: String::new(),
        zero_event_flag: false,
        date_time_from_zero_event: None,
        composition_id: None,
        cm_position: None,
        user_stamp_id: None,
    }
}

pub async fn seed_event(pool: &PgPool, title: &str) -> Event {
    EventRepo::create(pool, &new_event(title)).await.unwrap()
}

pub fn new_hero(name: &str, saga_id: Option<i64>) -> CreateHero {
    CreateHero {
        name: name.to_string(),
        description: String::new(),
        saga_id,
        birth_event_id: None,
        user_stamp_id: None,
        gla_id: None,
    }
}

pub async fn seed_hero(pool: &PgPool, name: &str, saga_id: Option<i64>) -> Hero {
    HeroRepo::create(pool, &new_hero(name, saga_id)).await.unwrap()
}

pub fn new_episode(composition_id: i64, title: &str, previous: Option<i64>) -> CreateEpisode {
    CreateEpisode {
        composition_id,
        title: title.to_string(),
        story_resume: format!("What happens in {title}"),
        start_event_id: None,
        previous_episode_id: previous,
        user_stamp_id: None,
    }
}

pub async fn seed_episode(
    pool: &PgPool,
    composition_id: i64,
    title: &str,
    previous: Option<i64>,
) -> Episode {
    EpisodeRepo::create(pool, &new_episode(composition_id, title, previous))
        .await
        .unwrap()
}

pub async fn seed_participation(pool: &PgPool, hero_id: i64, episode_id: i64) -> Participation {
    ParticipationRepo::create(
        pool,
        &CreateParticipation {
            hero_id,
            episode_id: Some(episode_id),
            role_type_id: None,
        },
    )
    .await
    .unwrap()
}

pub fn new_fact(composition_id: i64, title: &str) -> CreateFact {
    CreateFact {
        composition_id,
        title: title.to_string(),
        description: String::new(),
        fact_type_id: None,
        numeric_value: None,
        condition_for_effect: String::new(),
        result_of_event_id: None,
    }
}

pub async fn seed_fact(pool: &PgPool, composition_id: i64, title: &str) -> Fact {
    FactRepo::create(pool, &new_fact(composition_id, title))
        .await
        .unwrap()
}

pub async fn seed_value_dimension(pool: &PgPool, title: &str) -> ValueDimension {
    ValueDimensionRepo::create(
        pool,
        &CreateValueDimension {
            title: title.to_string(),
            description: String::new(),
            utopia_picture: String::new(),
            user_stamp_id: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_fact_type(pool: &PgPool, title: &str, is_numerical: bool) -> FactType {
    FactTypeRepo::create(
        pool,
        &CreateFactType {
            title: title.to_string(),
            is_numerical,
            measure: String::new(),
        },
    )
    .await
    .unwrap()
}
