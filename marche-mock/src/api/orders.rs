//! Order routes

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use shared::models::{Order, OrderStatusUpdate, Role};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_mine))
        .route("/api/vendor/orders", get(list_for_vendor))
        .route("/api/orders/{id}", get(get_by_id))
        .route("/api/orders/{id}/status", patch(update_status))
}

/// Orders visible to the caller: placed by a client, or carried by a courier
async fn list_mine(State(state): State<AppState>, user: AuthUser) -> Json<Vec<Order>> {
    Json(state.store.read().await.orders_for(&user.0))
}

async fn list_for_vendor(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Order>>> {
    user.require_role(Role::Vendor)?;
    Ok(Json(state.store.read().await.orders_for(&user.0)))
}

async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Order>> {
    Ok(Json(state.store.read().await.order_for(&user.0, &id)?))
}

async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<OrderStatusUpdate>,
) -> ApiResult<Json<Order>> {
    let order = state
        .store
        .write()
        .await
        .update_order_status(&user.0, &id, req.status)?;
    Ok(Json(order))
}
