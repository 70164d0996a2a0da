//! Integration tests for the orders API, driven end-to-end through the
//! ordering client's catalog and cart.

#![allow(clippy::unwrap_used)]

use moma_client::{Cart, CatalogClient};
use moma_core::Order;
use moma_integration_tests::TestApp;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;
use url::Url;

/// Build an order payload the way the checkout flow does: fetch the
/// catalog, fill a cart, snapshot its lines.
async fn cart_payload(app: &TestApp) -> (serde_json::Value, Decimal) {
    let catalog = CatalogClient::new(Url::parse(&app.base_url).unwrap());
    let items = catalog.list().await.unwrap();
    assert!(items.len() >= 2);

    let mut cart = Cart::new();
    cart.add_item(&items[0]);
    cart.add_item(&items[0]);
    cart.add_item(&items[1]);
    let total = cart.total();

    (json!({ "items": cart.order_lines() }), total)
}

#[tokio::test]
async fn placing_an_order_requires_auth() {
    let app = TestApp::spawn().await;
    let (payload, _) = cart_payload(&app).await;

    let resp = app
        .client
        .post(app.url("/api/orders"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_places_and_reads_own_order() {
    let app = TestApp::spawn().await;
    app.login_user().await;
    let (payload, total) = cart_payload(&app).await;

    let resp = app
        .client
        .post(app.url("/api/orders"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let order: Order = resp.json().await.unwrap();
    // The server recomputes the total from the submitted lines.
    assert_eq!(order.total, total);
    assert_eq!(order.status.to_string(), "pending");

    let resp = app
        .client
        .get(app.url("/api/orders/myorders"))
        .send()
        .await
        .unwrap();
    let mine: Vec<Order> = resp.json().await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, order.id);

    let resp = app
        .client
        .get(app.url(&format!("/api/orders/{}", order.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_order_is_rejected() {
    let app = TestApp::spawn().await;
    app.login_user().await;

    let resp = app
        .client
        .post(app.url("/api/orders"))
        .json(&json!({ "items": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_lists_all_orders_and_updates_status() {
    let app = TestApp::spawn().await;

    // A user places an order...
    app.login_user().await;
    let (payload, _) = cart_payload(&app).await;
    let order: Order = app
        .client
        .post(app.url("/api/orders"))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // ...and the admin sees and progresses it from a separate session.
    let admin = TestApp {
        base_url: app.base_url.clone(),
        client: reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap(),
    };
    admin.login_admin().await;

    let all: Vec<Order> = admin
        .client
        .get(admin.url("/api/orders"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 1);

    let resp = admin
        .client
        .put(admin.url(&format!("/api/orders/{}/status", order.id)))
        .json(&json!({ "status": "delivered" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Order = resp.json().await.unwrap();
    assert_eq!(updated.status.to_string(), "delivered");
}

#[tokio::test]
async fn regular_user_cannot_administer_orders() {
    let app = TestApp::spawn().await;
    app.login_user().await;

    let resp = app
        .client
        .get(app.url("/api/orders"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .client
        .put(app.url("/api/orders/1/status"))
        .json(&json!({ "status": "delivered" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn another_user_cannot_read_someone_elses_order() {
    let app = TestApp::spawn().await;

    app.login_user().await;
    let (payload, _) = cart_payload(&app).await;
    let order: Order = app
        .client
        .post(app.url("/api/orders"))
        .json(&payload)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // A freshly registered account is not the owner and not an admin.
    let other = TestApp {
        base_url: app.base_url.clone(),
        client: reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap(),
    };
    let resp = other
        .client
        .post(other.url("/api/auth/register"))
        .json(&json!({
            "name": "John Smith",
            "email": "john@example.com",
            "password": "swordfish"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = other
        .client
        .get(other.url(&format!("/api/orders/{}", order.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
