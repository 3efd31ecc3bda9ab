//! Mission routes (couriers only)

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use shared::models::{DeliveryBon, Mission, Role};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/missions", get(list_missions))
        .route("/api/missions/{id}/accept", post(accept))
        .route("/api/missions/{id}/refuse", post(refuse))
}

async fn list_missions(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Mission>>> {
    user.require_role(Role::Courier)?;
    Ok(Json(state.store.read().await.missions_for(user.id())))
}

async fn accept(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeliveryBon>> {
    user.require_role(Role::Courier)?;
    let bon = state.store.write().await.accept_mission(user.id(), &id)?;
    Ok(Json(bon))
}

async fn refuse(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    user.require_role(Role::Courier)?;
    state.store.write().await.refuse_mission(user.id(), &id)?;
    Ok(StatusCode::NO_CONTENT)
}
