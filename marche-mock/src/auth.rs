//! Bearer token extractor

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use shared::ErrorCode;
use shared::client::UserInfo;
use shared::models::Role;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Authenticated caller
///
/// Handlers taking this extractor reject requests without a valid
/// `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserInfo);

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn require_role(&self, role: Role) -> ApiResult<()> {
        if self.0.role == role {
            Ok(())
        } else {
            Err(ApiError::role_required(role))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(value) => value
                .strip_prefix("Bearer ")
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| {
                    ApiError::with_message(ErrorCode::TokenInvalid, "Invalid authorization header")
                })?,
            None => {
                tracing::warn!(uri = %parts.uri, "Missing bearer token");
                return Err(ApiError::unauthorized());
            }
        };

        let user = state.store.read().await.authenticate(token).inspect_err(|e| {
            tracing::warn!(uri = %parts.uri, error = %e, "Bearer token rejected");
        })?;

        let user = AuthUser(user);
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
