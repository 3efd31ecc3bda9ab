//! Auth routes

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

use super::validated;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/me", get(me))
}

async fn login(
    State(state): State<AppState>,
    body: Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let req = validated(body)?;
    let resp = state
        .store
        .write()
        .await
        .login(&req.email, &req.password, state.token_ttl)?;
    tracing::info!(user_id = %resp.user.id, role = %resp.user.role, "Login succeeded");
    Ok(Json(resp))
}

async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let resp = state.store.write().await.register(req, state.token_ttl)?;
    Ok(Json(resp))
}

async fn me(user: AuthUser) -> Json<UserInfo> {
    Json(user.0)
}
