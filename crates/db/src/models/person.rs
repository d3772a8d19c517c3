//! People: global actors, user profiles, user stamps and authors.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyverse_core::types::{Date, DbId, Timestamp};
use storyverse_core::validation::not_blank;
use validator::Validate;

// ---------------------------------------------------------------------------
// GlobalActor
// ---------------------------------------------------------------------------

/// A row from the `global_actors` table: a cross-saga identity under which
/// characters and authors sharing a name are registered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GlobalActor {
    pub id: DbId,
    pub nickname: String,
    pub date_of_registration: Date,
    pub registered_by_user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGlobalActor {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub nickname: String,
    pub date_of_registration: Date,
    pub registered_by_user_id: Option<DbId>,
}

pub type UpdateGlobalActor = CreateGlobalActor;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A row from the `users` table: the catalog profile of an account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub account_id: DbId,
    pub native_language: String,
    pub country_id: Option<DbId>,
    pub gla_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    pub account_id: DbId,
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub native_language: String,
    pub country_id: Option<DbId>,
    pub gla_id: Option<DbId>,
}

pub type UpdateUser = CreateUser;

/// `?q=` matches the account username.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListParams {
    pub q: Option<String>,
    pub country_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// UserStamp
// ---------------------------------------------------------------------------

/// A row from the `user_stamps` table: which user asserted or edited a
/// record, when, and with what status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserStamp {
    pub id: DbId,
    pub user_id: DbId,
    pub stamped_at: Timestamp,
    pub status_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserStamp {
    pub user_id: DbId,
    pub stamped_at: Timestamp,
    pub status_id: Option<DbId>,
}

pub type UpdateUserStamp = CreateUserStamp;

/// `?q=` matches the username of the stamping user's account.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserStampListParams {
    pub q: Option<String>,
    pub status_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Author
// ---------------------------------------------------------------------------

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    /// Path relative to the media root, set by the photo upload endpoint.
    pub photo_file: Option<String>,
    pub date_of_birth: Option<Date>,
    pub wiki_link: Option<String>,
    pub country_of_birth_id: Option<DbId>,
    pub gla_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAuthor {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub name: String,
    pub date_of_birth: Option<Date>,
    #[validate(url)]
    pub wiki_link: Option<String>,
    pub country_of_birth_id: Option<DbId>,
    pub gla_id: Option<DbId>,
}

pub type UpdateAuthor = CreateAuthor;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorListParams {
    pub q: Option<String>,
    pub country_of_birth_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
