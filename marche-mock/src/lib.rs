//! In-memory marketplace backend
//!
//! Serves the same REST surface as the production API so the client
//! library can be exercised end to end, either over TCP (`main.rs`) or
//! in process through [`router`].

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod seed;
pub mod state;
pub mod store;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use store::Store;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full API router with tracing and permissive CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::auth::router())
        .merge(api::catalog::router())
        .merge(api::reviews::router())
        .merge(api::cart::router())
        .merge(api::orders::router())
        .merge(api::delivery::router())
        .merge(api::missions::router())
        .merge(api::notifications::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Router over the demo data set
pub fn demo_router() -> Router {
    router(AppState::new(seed::demo()))
}
