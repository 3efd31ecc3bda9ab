//! Cart routes (clients only)

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};
use shared::models::{AddCartItem, Cart, CheckoutRequest, Order, Role, UpdateCartItem};

use super::validated;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cart", get(get_cart))
        .route("/api/cart/items", post(add_item))
        .route(
            "/api/cart/items/{product_id}",
            patch(update_item).delete(remove_item),
        )
        .route("/api/cart/checkout", post(checkout))
}

async fn get_cart(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Cart>> {
    user.require_role(Role::Client)?;
    Ok(Json(state.store.read().await.cart(user.id())))
}

async fn add_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<AddCartItem>,
) -> ApiResult<Json<Cart>> {
    user.require_role(Role::Client)?;
    let cart = state.store.write().await.add_to_cart(user.id(), &req)?;
    Ok(Json(cart))
}

async fn update_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<String>,
    Json(req): Json<UpdateCartItem>,
) -> ApiResult<Json<Cart>> {
    user.require_role(Role::Client)?;
    let cart = state
        .store
        .write()
        .await
        .update_cart_item(user.id(), &product_id, req.quantity)?;
    Ok(Json(cart))
}

async fn remove_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<String>,
) -> ApiResult<Json<Cart>> {
    user.require_role(Role::Client)?;
    let cart = state
        .store
        .write()
        .await
        .remove_cart_item(user.id(), &product_id)?;
    Ok(Json(cart))
}

async fn checkout(
    State(state): State<AppState>,
    user: AuthUser,
    body: Json<CheckoutRequest>,
) -> ApiResult<Json<Order>> {
    user.require_role(Role::Client)?;
    let req = validated(body)?;
    let order = state
        .store
        .write()
        .await
        .checkout(user.id(), &req.delivery_address)?;
    Ok(Json(order))
}
