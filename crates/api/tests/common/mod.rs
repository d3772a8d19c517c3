#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use storyverse_api::auth::jwt::{generate_access_token, JwtConfig};
use storyverse_api::config::ServerConfig;
use storyverse_api::router::build_app_router;
use storyverse_api::state::AppState;
use storyverse_core::roles::role_for;
use storyverse_db::models::account::{Account, CreateAccount};
use storyverse_db::repositories::AccountRepo;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Small enough that tests can exceed it cheaply.
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// Build a test `ServerConfig` with safe defaults and the given media root.
pub fn test_config(media_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        media_root,
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
///
/// Uploads land in a throwaway directory; tests that inspect stored files
/// use [`build_test_app_with_media`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media(pool, std::env::temp_dir().join("storyverse-test-media"))
}

pub fn build_test_app_with_media(pool: PgPool, media_root: PathBuf) -> Router {
    let config = test_config(media_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Accounts and tokens
// ---------------------------------------------------------------------------

/// Insert an account whose password can never verify. Enough for tests that
/// mint tokens directly instead of logging in.
pub async fn seed_account(pool: &PgPool, username: &str, is_staff: bool) -> Account {
    AccountRepo::create(
        pool,
        &CreateAccount {
            username: username.to_string(),
            password_hash: "!unusable".to_string(),
            is_staff,
        },
    )
    .await
    .expect("account creation should succeed")
}

pub fn token_for(account: &Account) -> String {
    let role = role_for(account.is_staff);
    let config = test_config(PathBuf::new());
    generate_access_token(account.id, role, &config.jwt).expect("token generation should succeed")
}

/// Create a staff account and return a bearer token for it.
pub async fn staff_token(pool: &PgPool) -> String {
    let account = seed_account(pool, "staff", true).await;
    token_for(&account)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Request<Body> {
    request(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, request(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, body, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(
        app,
        request(Method::GET, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::POST, uri, body, Some(token))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::PUT, uri, body, Some(token))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(
        app,
        request(Method::DELETE, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

const BOUNDARY: &str = "storyverse-test-boundary";

/// POST a multipart form with a single part named `field`.
pub async fn post_file_auth(
    app: Router,
    uri: &str,
    field: &str,
    file_name: &str,
    bytes: &[u8],
    token: &str,
) -> Response {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = request(Method::POST, uri, Some(token))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a JSON body and return the created record's id, asserting 201.
pub async fn create_id(app: Router, uri: &str, body: serde_json::Value, token: &str) -> i64 {
    let response = post_json_auth(app, uri, body, token).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "POST {uri} should create"
    );
    body_json(response).await["id"].as_i64().unwrap()
}
