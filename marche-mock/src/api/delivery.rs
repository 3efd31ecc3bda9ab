//! Delivery bon routes (couriers only)

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use shared::models::{BonAction, DeliveryBon, FailBonRequest, Role};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/bons", get(list_bons))
        .route("/api/bons/{id}/pickup", post(pickup))
        .route("/api/bons/{id}/deliver", post(deliver))
        .route("/api/bons/{id}/fail", post(fail))
}

async fn list_bons(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<DeliveryBon>>> {
    user.require_role(Role::Courier)?;
    Ok(Json(state.store.read().await.bons_for(user.id())))
}

async fn advance(state: &AppState, user: &AuthUser, id: &str, action: BonAction) -> ApiResult<Json<DeliveryBon>> {
    user.require_role(Role::Courier)?;
    let bon = state
        .store
        .write()
        .await
        .advance_bon(user.id(), id, &action)?;
    Ok(Json(bon))
}

async fn pickup(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeliveryBon>> {
    advance(&state, &user, &id, BonAction::Pickup).await
}

async fn deliver(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeliveryBon>> {
    advance(&state, &user, &id, BonAction::Deliver).await
}

async fn fail(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<FailBonRequest>,
) -> ApiResult<Json<DeliveryBon>> {
    advance(&state, &user, &id, BonAction::Fail { reason: req.reason }).await
}
