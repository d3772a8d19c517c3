//! Repositories for `global_actors`, `users`, `user_stamps` and `authors`.

use sqlx::PgPool;
use storyverse_core::search::search_patterns;
use storyverse_core::types::DbId;

use super::{delete_row, page};
use crate::models::person::{
    Author, AuthorListParams, CreateAuthor, CreateGlobalActor, CreateUser, CreateUserStamp,
    GlobalActor, UpdateAuthor, UpdateGlobalActor, UpdateUser, UpdateUserStamp, User,
    UserListParams, UserStamp, UserStampListParams,
};
use crate::models::SearchParams;

// ---------------------------------------------------------------------------
// GlobalActor
// ---------------------------------------------------------------------------

const GLOBAL_ACTOR_COLUMNS: &str =
    "id, nickname, date_of_registration, registered_by_user_id, created_at, updated_at";

pub struct GlobalActorRepo;

impl GlobalActorRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateGlobalActor,
    ) -> Result<GlobalActor, sqlx::Error> {
        let query = format!(
            "INSERT INTO global_actors (nickname, date_of_registration, registered_by_user_id)
             VALUES ($1, $2, $3)
             RETURNING {GLOBAL_ACTOR_COLUMNS}"
        );
        sqlx::query_as::<_, GlobalActor>(&query)
            .bind(&input.nickname)
            .bind(input.date_of_registration)
            .bind(input.registered_by_user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GlobalActor>, sqlx::Error> {
        let query = format!("SELECT {GLOBAL_ACTOR_COLUMNS} FROM global_actors WHERE id = $1");
        sqlx::query_as::<_, GlobalActor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List global actors whose nickname contains every search word.
    pub async fn list(
        pool: &PgPool,
        params: &SearchParams,
    ) -> Result<Vec<GlobalActor>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {GLOBAL_ACTOR_COLUMNS} FROM global_actors
             WHERE nickname ILIKE ALL($1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, GlobalActor>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGlobalActor,
    ) -> Result<Option<GlobalActor>, sqlx::Error> {
        let query = format!(
            "UPDATE global_actors SET
                nickname = $2,
                date_of_registration = $3,
                registered_by_user_id = $4
             WHERE id = $1
             RETURNING {GLOBAL_ACTOR_COLUMNS}"
        );
        sqlx::query_as::<_, GlobalActor>(&query)
            .bind(id)
            .bind(&input.nickname)
            .bind(input.date_of_registration)
            .bind(input.registered_by_user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "global_actors", id).await
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

const USER_COLUMNS: &str =
    "id, account_id, native_language, country_id, gla_id, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    /// Create the profile for an account. Each account has at most one.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (account_id, native_language, country_id, gla_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.account_id)
            .bind(&input.native_language)
            .bind(input.country_id)
            .bind(input.gla_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List users, searching the username of the linked account.
    pub async fn list(pool: &PgPool, params: &UserListParams) -> Result<Vec<User>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE account_id IN (SELECT id FROM accounts WHERE username ILIKE ALL($1))
               AND ($2::BIGINT IS NULL OR country_id = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.country_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                account_id = $2,
                native_language = $3,
                country_id = $4,
                gla_id = $5
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.account_id)
            .bind(&input.native_language)
            .bind(input.country_id)
            .bind(input.gla_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user profile together with its stamps.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "users", id).await
    }
}

// ---------------------------------------------------------------------------
// UserStamp
// ---------------------------------------------------------------------------

const USER_STAMP_COLUMNS: &str = "id, user_id, stamped_at, status_id, created_at, updated_at";

pub struct UserStampRepo;

impl UserStampRepo {
    pub async fn create(pool: &PgPool, input: &CreateUserStamp) -> Result<UserStamp, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_stamps (user_id, stamped_at, status_id)
             VALUES ($1, $2, $3)
             RETURNING {USER_STAMP_COLUMNS}"
        );
        sqlx::query_as::<_, UserStamp>(&query)
            .bind(input.user_id)
            .bind(input.stamped_at)
            .bind(input.status_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserStamp>, sqlx::Error> {
        let query = format!("SELECT {USER_STAMP_COLUMNS} FROM user_stamps WHERE id = $1");
        sqlx::query_as::<_, UserStamp>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List stamps, searching the username of the stamping user's account.
    pub async fn list(
        pool: &PgPool,
        params: &UserStampListParams,
    ) -> Result<Vec<UserStamp>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {USER_STAMP_COLUMNS} FROM user_stamps
             WHERE user_id IN (
                 SELECT u.id FROM users u
                 JOIN accounts a ON a.id = u.account_id
                 WHERE a.username ILIKE ALL($1)
             )
               AND ($2::BIGINT IS NULL OR status_id = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, UserStamp>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.status_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUserStamp,
    ) -> Result<Option<UserStamp>, sqlx::Error> {
        let query = format!(
            "UPDATE user_stamps SET user_id = $2, stamped_at = $3, status_id = $4
             WHERE id = $1
             RETURNING {USER_STAMP_COLUMNS}"
        );
        sqlx::query_as::<_, UserStamp>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.stamped_at)
            .bind(input.status_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a stamp. Records stamped with it keep existing, unstamped.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "user_stamps", id).await
    }
}

// ---------------------------------------------------------------------------
// Author
// ---------------------------------------------------------------------------

const AUTHOR_COLUMNS: &str = "id, name, photo_file, date_of_birth, wiki_link, \
     country_of_birth_id, gla_id, created_at, updated_at";

pub struct AuthorRepo;

impl AuthorRepo {
    pub async fn create(pool: &PgPool, input: &CreateAuthor) -> Result<Author, sqlx::Error> {
        let query = format!(
            "INSERT INTO authors (name, date_of_birth, wiki_link, country_of_birth_id, gla_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {AUTHOR_COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(&input.name)
            .bind(input.date_of_birth)
            .bind(&input.wiki_link)
            .bind(input.country_of_birth_id)
            .bind(input.gla_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        let query = format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = $1");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, params: &AuthorListParams) -> Result<Vec<Author>, sqlx::Error> {
        let (limit, offset) = page(params.limit, params.offset);
        let query = format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors
             WHERE name ILIKE ALL($1)
               AND ($2::BIGINT IS NULL OR country_of_birth_id = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(search_patterns(params.q.as_deref()))
            .bind(params.country_of_birth_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace the editable columns. `photo_file` is left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAuthor,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query = format!(
            "UPDATE authors SET
                name = $2,
                date_of_birth = $3,
                wiki_link = $4,
                country_of_birth_id = $5,
                gla_id = $6
             WHERE id = $1
             RETURNING {AUTHOR_COLUMNS}"
        );
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.date_of_birth)
            .bind(&input.wiki_link)
            .bind(input.country_of_birth_id)
            .bind(input.gla_id)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the stored photo path.
    pub async fn set_photo(
        pool: &PgPool,
        id: DbId,
        photo_file: Option<&str>,
    ) -> Result<Option<Author>, sqlx::Error> {
        let query =
            format!("UPDATE authors SET photo_file = $2 WHERE id = $1 RETURNING {AUTHOR_COLUMNS}");
        sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(photo_file)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_row(pool, "authors", id).await
    }
}
