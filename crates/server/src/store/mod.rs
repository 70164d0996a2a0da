//! In-memory document collections.
//!
//! The backend persists nothing durably: the catalog, the account roster,
//! and placed orders each live in one lock-guarded collection seeded at
//! startup. Every operation touches a single document; absence is an
//! explicit `None`, and the only storage-layer fault is a poisoned lock,
//! surfaced as a generic server fault with no partial-failure semantics.

pub mod menu;
pub mod orders;
pub mod users;

use thiserror::Error;

pub use menu::MenuStore;
pub use orders::OrderStore;
pub use users::{UserStore, UserStoreError};

/// Storage-layer fault.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the collection lock.
    #[error("storage backend fault")]
    Poisoned,
}
