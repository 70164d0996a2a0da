//! Per-session application context.
//!
//! The context owns the two state managers every page reads through. Views
//! receive it by reference; there are no module-level globals, so two
//! contexts never share state.

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use crate::cart::Cart;
use crate::session::{AuthError, SessionManager};
use crate::storage::IdentityStore;

/// Default API base URL when `MOMA_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Ordering client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog REST API.
    pub api_base_url: Url,
    /// Key used to sign the persisted identity envelope.
    pub identity_secret: SecretString,
}

impl ClientConfig {
    /// Build a configuration from explicit values.
    #[must_use]
    pub const fn new(api_base_url: Url, identity_secret: SecretString) -> Self {
        Self {
            api_base_url,
            identity_secret,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` if present. Reads
    /// `MOMA_API_URL` (optional, defaults to the local dev server) and
    /// `MOMA_IDENTITY_SECRET` (required).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the secret is missing or the URL is
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_base_url = std::env::var("MOMA_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("MOMA_API_URL".to_string(), e.to_string()))?;
        let identity_secret = std::env::var("MOMA_IDENTITY_SECRET")
            .map(SecretString::from)
            .map_err(|_| ConfigError::MissingEnvVar("MOMA_IDENTITY_SECRET".to_string()))?;

        Ok(Self {
            api_base_url,
            identity_secret,
        })
    }
}

/// Session-scoped state: the session manager and the cart.
#[derive(Debug)]
pub struct AppContext<S: IdentityStore> {
    session: SessionManager<S>,
    cart: Cart,
}

impl<S: IdentityStore> AppContext<S> {
    /// Build the context and restore any persisted identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the roster cannot be seeded.
    pub fn new(config: &ClientConfig, store: S) -> Result<Self, AuthError> {
        let mut session = SessionManager::new(store, config.identity_secret.clone())?;
        session.restore_on_start();
        Ok(Self {
            session,
            cart: Cart::new(),
        })
    }

    /// The session state manager.
    #[must_use]
    pub const fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    /// Mutable access to the session state manager.
    pub fn session_mut(&mut self) -> &mut SessionManager<S> {
        &mut self.session
    }

    /// The cart state manager.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the cart state manager.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}
