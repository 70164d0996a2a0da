//! Moma Core - Shared types library.
//!
//! This crate provides common types used across all Moma Restaurant components:
//! - `client` - Session and cart state for the ordering client
//! - `server` - JSON REST backend serving the menu catalog and orders
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, roles, and the menu/user/order
//!   domain types shared between the client and the server

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
