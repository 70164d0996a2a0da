//! Moma ordering client state.
//!
//! This crate models the cross-page state of the ordering client: the two
//! mutable state containers every view reads through, plus typed access to
//! the catalog REST API and the checkout simulation.
//!
//! # Architecture
//!
//! - [`session`] - Session State Manager: current identity, mock roster,
//!   login/register/logout/restore
//! - [`cart`] - Cart State Manager: lines, quantities, totals
//! - [`context`] - Per-session [`context::AppContext`] owning both managers;
//!   there are no ambient globals
//! - [`storage`] - Key-value persistence seam for the identity envelope
//! - [`catalog`] - Read-only client for the menu REST surface, plus
//!   search/category/price filtering
//! - [`checkout`] - Payment form validation and the simulated gateway
//!
//! Session and cart state are each owned exclusively by their manager and
//! scoped to one session; views receive the context by reference and never
//! mutate state directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod context;
mod envelope;
pub mod session;
pub mod storage;

pub use cart::{Cart, CartLine};
pub use catalog::{CatalogClient, CatalogError, MenuFilter};
pub use checkout::{FieldError, PaymentError, PaymentForm, PaymentGateway, PaymentReceipt};
pub use context::{AppContext, ClientConfig, ConfigError};
pub use session::{AuthError, Roster, SessionManager};
pub use storage::{FileStore, IdentityStore, MemoryStore, StorageError};
