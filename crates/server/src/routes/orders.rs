//! Order route handlers.
//!
//! Every order endpoint requires an authenticated session. Regular users
//! place and read their own orders; listing everything and changing a
//! status are admin operations.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use moma_core::{Order, OrderId, OrderLine, OrderStatus};

use crate::error::{ApiError, Result};
use crate::middleware::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Order creation body: the cart lines at checkout time.
#[derive(Debug, Deserialize)]
pub struct NewOrderPayload {
    pub items: Vec<OrderLine>,
}

/// Status update body.
#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: OrderStatus,
}

/// Place an order from the submitted cart lines.
#[instrument(skip(user, state, payload), fields(user_id = %user.0.id))]
pub async fn create(
    user: RequireAuth,
    State(state): State<AppState>,
    Json(payload): Json<NewOrderPayload>,
) -> Result<impl IntoResponse> {
    if payload.items.is_empty() {
        return Err(ApiError::BadRequest("No order items".to_string()));
    }
    let order = state.orders().create(user.0.id, payload.items)?;
    tracing::info!(order_id = %order.id, total = %order.total, "order placed");
    Ok((StatusCode::CREATED, Json(order)))
}

/// List the caller's orders.
#[instrument(skip(user, state), fields(user_id = %user.0.id))]
pub async fn my_orders(
    user: RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_for_user(user.0.id)?))
}

/// Fetch one order. Owners see their own; admins see any.
#[instrument(skip(user, state), fields(user_id = %user.0.id))]
pub async fn show(
    user: RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>> {
    let order = state
        .orders()
        .get(id)?
        .ok_or_else(|| ApiError::NotFound("Order".to_string()))?;
    if order.user_id != user.0.id && !user.0.is_admin() {
        return Err(ApiError::Forbidden);
    }
    Ok(Json(order))
}

/// List every order (admin).
#[instrument(skip(admin, state), fields(admin = %admin.0.email))]
pub async fn index(
    admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_all()?))
}

/// Update an order's status (admin).
#[instrument(skip(admin, state, payload), fields(admin = %admin.0.email))]
pub async fn update_status(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<Order>> {
    state
        .orders()
        .set_status(id, payload.status)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Order".to_string()))
}
