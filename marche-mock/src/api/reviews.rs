//! Review routes

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use shared::models::{Review, ReviewRequest, Role};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/products/{id}/reviews",
        get(list_reviews).post(post_review),
    )
}

async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Json<Vec<Review>>> {
    Ok(Json(state.store.read().await.reviews_for(&product_id)?))
}

async fn post_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> ApiResult<Json<Review>> {
    user.require_role(Role::Client)?;
    let review = state
        .store
        .write()
        .await
        .post_review(&user.0, &product_id, req)?;
    Ok(Json(review))
}
