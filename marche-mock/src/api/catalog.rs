//! Catalog routes (no authentication)

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use shared::models::{Boutique, Product, ProductQuery};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/boutiques", get(list_boutiques))
        .route("/api/products", get(search_products))
        .route("/api/products/{id}", get(get_product))
}

async fn list_boutiques(State(state): State<AppState>) -> Json<Vec<Boutique>> {
    Json(state.store.read().await.boutiques.clone())
}

async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    Json(state.store.read().await.search_products(&query))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let product = state.store.read().await.product(&id)?.clone();
    Ok(Json(product))
}
