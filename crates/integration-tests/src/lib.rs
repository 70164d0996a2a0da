//! Integration tests for Moma Restaurant.
//!
//! Each test spawns the real server on an ephemeral port and drives it over
//! HTTP with a cookie-aware client, so session-gated routes behave exactly
//! as they do in production.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p moma-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_api` - Login/register/logout/me flows
//! - `menu_api` - Catalog reads and admin CRUD
//! - `orders_api` - Order placement and administration

use moma_server::config::ServerConfig;
use moma_server::routes;
use moma_server::state::AppState;

/// A running server instance plus a cookie-aware client.
pub struct TestApp {
    /// Base URL, e.g. `http://127.0.0.1:49301`.
    pub base_url: String,
    /// Client with cookie store enabled (session survives across requests).
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the server on an ephemeral port with the seeded catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started; tests cannot proceed without
    /// it.
    pub async fn spawn() -> Self {
        let state =
            AppState::new(ServerConfig::default()).expect("Failed to initialize application state");
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Absolute URL for a path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Log in with the seed admin account.
    ///
    /// # Panics
    ///
    /// Panics if the login request fails.
    pub async fn login_admin(&self) {
        self.login("admin@example.com", "admin123").await;
    }

    /// Log in with the seed regular user account.
    ///
    /// # Panics
    ///
    /// Panics if the login request fails.
    pub async fn login_user(&self) {
        self.login("user@example.com", "user123").await;
    }

    async fn login(&self, email: &str, password: &str) {
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Login request failed");
        assert!(resp.status().is_success(), "login failed for {email}");
    }
}
