//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::{MenuStore, OrderStore, UserStore, UserStoreError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; owns the configuration and the three
/// document collections.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    menu: MenuStore,
    orders: OrderStore,
    users: UserStore,
}

impl AppState {
    /// Create application state with the seeded catalog and roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed roster cannot be hashed.
    pub fn new(config: ServerConfig) -> Result<Self, UserStoreError> {
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                menu: MenuStore::seeded(),
                orders: OrderStore::new(),
                users: UserStore::seeded()?,
            }),
        })
    }

    /// State with an empty catalog (tests that want full control).
    ///
    /// # Errors
    ///
    /// Returns an error if the seed roster cannot be hashed.
    pub fn with_empty_catalog(config: ServerConfig) -> Result<Self, UserStoreError> {
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                menu: MenuStore::new(),
                orders: OrderStore::new(),
                users: UserStore::seeded()?,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the menu catalog.
    #[must_use]
    pub fn menu(&self) -> &MenuStore {
        &self.inner.menu
    }

    /// Get a reference to the orders collection.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// Get a reference to the account roster.
    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }
}
