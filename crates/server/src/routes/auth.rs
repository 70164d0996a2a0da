//! Authentication route handlers.
//!
//! Thin REST layer over the mock account roster. A successful login or
//! registration stores the sanitized identity in the cookie session; the
//! password never leaves this module.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use tracing::instrument;

use moma_core::{Gender, User};

use crate::error::Result;
use crate::middleware::{RequireAuth, clear_current_user, set_current_user};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to the form's preselected value when omitted.
    #[serde(default)]
    pub gender: Gender,
}

/// Handle login.
#[instrument(skip(state, session, payload), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<User>> {
    let user = state.users().authenticate(&payload.email, &payload.password)?;
    set_current_user(&session, &user).await?;
    tracing::info!(user_id = %user.id, "login");
    Ok(Json(user))
}

/// Handle registration.
#[instrument(skip(state, session, payload), fields(email = %payload.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterPayload>,
) -> Result<Json<User>> {
    let user = state.users().register(
        &payload.name,
        &payload.email,
        &payload.password,
        payload.gender,
    )?;
    set_current_user(&session, &user).await?;
    tracing::info!(user_id = %user.id, "registered");
    Ok(Json(user))
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    clear_current_user(&session).await?;
    Ok(Json(json!({ "message": "Logged out" })))
}

/// Return the current identity.
#[instrument(skip(user), fields(user_id = %user.0.id))]
pub async fn me(user: RequireAuth) -> Json<User> {
    Json(user.0)
}
