//! Moma server library.
//!
//! This crate provides the backend as a library, allowing it to be tested
//! end-to-end and reused by the integration-tests crate. The binary in
//! `main.rs` is a thin wrapper that loads configuration and serves the
//! router.
//!
//! # Architecture
//!
//! - Axum JSON REST API over in-memory document collections
//! - Mock account roster with argon2-hashed credentials
//! - Cookie sessions via tower-sessions (memory store)
//! - Menu mutations and order administration are admin-gated

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;
