//! HTTP-level integration tests for signup and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_creates_account_and_returns_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "asha", "password": "long-enough-pass" });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["user"]["username"], "asha");
    assert!(json["user"]["id"].is_number());
    // The hash never leaks.
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signup_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "asha", "password": "short" });
    let response = post_json(app, "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "asha", "password": "long-enough-pass" });
    let first = post_json(app.clone(), "/api/v1/auth/signup", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "asha", "password": "long-enough-pass" });
    let signup = post_json(app.clone(), "/api/v1/auth/signup", body.clone()).await;
    assert_eq!(signup.status(), StatusCode::CREATED);

    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let token = json["access_token"].as_str().unwrap();

    // The issued token authenticates a protected route.
    let trips = get_auth(app, "/api/v1/trips", token).await;
    assert_eq!(trips.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_rejects_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "asha", "password": "long-enough-pass" });
    post_json(app.clone(), "/api/v1/auth/signup", body).await;

    let bad = serde_json::json!({ "username": "asha", "password": "wrong-password-0" });
    let response = post_json(app, "/api/v1/auth/login", bad).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_rejects_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "nobody", "password": "long-enough-pass" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/trips").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let garbage = get_auth(app, "/api/v1/trips", "not-a-jwt").await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
}
