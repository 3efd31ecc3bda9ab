//! Notification routes

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use shared::models::Notification;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/notifications", get(list))
        .route("/api/notifications/{id}/read", post(mark_read))
}

async fn list(State(state): State<AppState>, user: AuthUser) -> Json<Vec<Notification>> {
    Json(state.store.read().await.notifications_for(user.id()))
}

async fn mark_read(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Notification>> {
    Ok(Json(state.store.write().await.mark_read(user.id(), &id)?))
}
