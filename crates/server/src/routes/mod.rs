//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Welcome message
//! GET  /health                      - Liveness check
//!
//! # Menu (public reads, admin writes)
//! GET    /api/menu                  - List the catalog
//! GET    /api/menu/category/:name   - List one category
//! GET    /api/menu/:id              - One item or 404
//! POST   /api/menu                  - Create item (admin)
//! PUT    /api/menu/:id              - Partial update (admin)
//! DELETE /api/menu/:id              - Delete item (admin)
//!
//! # Auth
//! POST /api/auth/login              - Login, sets session cookie
//! POST /api/auth/register           - Register, sets session cookie
//! POST /api/auth/logout             - Clear session
//! GET  /api/auth/me                 - Current identity
//!
//! # Orders (all require auth)
//! POST /api/orders                  - Place an order
//! GET  /api/orders/myorders         - Caller's orders
//! GET  /api/orders/:id              - One order (owner or admin)
//! GET  /api/orders                  - All orders (admin)
//! PUT  /api/orders/:id/status      - Update status (admin)
//! ```

pub mod auth;
pub mod menu;
pub mod orders;

use axum::{
    Json, Router,
    routing::get,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Create the menu routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::index).post(menu::create))
        .route("/category/{category}", get(menu::by_category))
        .route(
            "/{id}",
            get(menu::show).put(menu::update).delete(menu::destroy),
        )
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    use axum::routing::post;

    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    use axum::routing::put;

    Router::new()
        .route("/", get(orders::index).post(orders::create))
        .route("/myorders", get(orders::my_orders))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", put(orders::update_status))
}

/// Build the full application router with middleware layers applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .nest("/api/menu", menu_routes())
        .nest("/api/auth", auth_routes())
        .nest("/api/orders", order_routes())
        .layer(create_session_layer())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Base route, as a quick smoke check that the API is up.
async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to Moma Restaurant API" }))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The backend has no external
/// dependencies to probe.
async fn health() -> &'static str {
    "ok"
}
