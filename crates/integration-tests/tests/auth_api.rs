//! Integration tests for the auth API.

#![allow(clippy::unwrap_used)]

use moma_integration_tests::TestApp;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn welcome_and_health() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Welcome to Moma Restaurant API");

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn login_with_seed_admin_returns_sanitized_identity() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": "admin@example.com", "password": "admin123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["role"], "admin");
    assert_eq!(body["name"], "Admin User");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": "admin@example.com", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn me_requires_session_and_reflects_login() {
    let app = TestApp::spawn().await;

    let resp = app.client.get(app.url("/api/auth/me")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    app.login_user().await;
    let resp = app.client.get(app.url("/api/auth/me")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["email"], "user@example.com");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn register_creates_session_and_sequential_id() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "name": "Sarah Connor",
            "email": "sarah@example.com",
            "password": "resist1997",
            "gender": "female"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    // Two seed accounts, so the first registration gets id 3.
    assert_eq!(body["id"], 3);
    assert_eq!(body["role"], "user");

    let resp = app.client.get(app.url("/api/auth/me")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn register_with_duplicate_email_conflicts() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "name": "Imposter",
            "email": "user@example.com",
            "password": "hunter22"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Email already in use");
}

#[tokio::test]
async fn register_validates_fields() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({ "name": "Al", "email": "a@b.c", "password": "short" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({ "name": "Al", "email": "not-an-email", "password": "hunter22" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = TestApp::spawn().await;
    app.login_admin().await;

    let resp = app
        .client
        .post(app.url("/api/auth/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.client.get(app.url("/api/auth/me")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
