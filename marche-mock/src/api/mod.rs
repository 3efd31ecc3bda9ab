//! API routes
//!
//! - [`auth`] - login, registration, current user
//! - [`catalog`] - boutiques and products (public)
//! - [`reviews`] - product reviews
//! - [`cart`] - client cart and checkout
//! - [`orders`] - client and vendor orders
//! - [`delivery`] - courier delivery bons
//! - [`missions`] - open delivery missions
//! - [`notifications`] - per-user notifications

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod delivery;
pub mod missions;
pub mod notifications;
pub mod orders;
pub mod reviews;

use axum::Json;
use serde::de::DeserializeOwned;
use shared::Validate;

use crate::error::{ApiError, ApiResult};

/// Validate a decoded request body
pub(crate) fn validated<T: Validate + DeserializeOwned>(Json(body): Json<T>) -> ApiResult<T> {
    body.validate().map_err(|e| ApiError::validation(&e))?;
    Ok(body)
}
