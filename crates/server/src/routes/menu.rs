//! Menu catalog route handlers.
//!
//! Reads are public; create/update/delete require an admin session.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::instrument;

use moma_core::{Category, MenuItem, MenuItemId, MenuItemPatch, NewMenuItem};

use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// List the whole catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>> {
    Ok(Json(state.menu().list()?))
}

/// Fetch one item, 404 when absent.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
) -> Result<Json<MenuItem>> {
    state
        .menu()
        .get(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Menu item".to_string()))
}

/// List the items in one category.
#[instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<MenuItem>>> {
    let category = category
        .parse::<Category>()
        .map_err(ApiError::BadRequest)?;
    Ok(Json(state.menu().list_by_category(category)?))
}

/// Create a menu item (admin).
#[instrument(skip(admin, state, new), fields(admin = %admin.0.email))]
pub async fn create(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Json(new): Json<NewMenuItem>,
) -> Result<impl IntoResponse> {
    let item = state.menu().insert(new)?;
    tracing::info!(item_id = %item.id, "menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Apply a partial update to a menu item (admin).
#[instrument(skip(admin, state, patch), fields(admin = %admin.0.email))]
pub async fn update(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
    Json(patch): Json<MenuItemPatch>,
) -> Result<Json<MenuItem>> {
    state
        .menu()
        .update(id, patch)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Menu item".to_string()))
}

/// Delete a menu item (admin).
#[instrument(skip(admin, state), fields(admin = %admin.0.email))]
pub async fn destroy(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
) -> Result<Json<serde_json::Value>> {
    if state.menu().delete(id)? {
        tracing::info!(item_id = %id, "menu item removed");
        Ok(Json(json!({ "message": "Menu item removed" })))
    } else {
        Err(ApiError::NotFound("Menu item".to_string()))
    }
}
