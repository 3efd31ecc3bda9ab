//! Session credential
//!
//! A credential is created once at login and never mutated. Repositories
//! share it through an `Arc`; signing out means dropping it.

use chrono::{DateTime, Utc};
use shared::client::{LoginResponse, UserInfo};
use shared::models::Role;

/// Bearer token plus the account it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    user: UserInfo,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(token: impl Into<String>, user: UserInfo, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            token: token.into(),
            user,
            expires_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }

    /// `Authorization` header value
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<LoginResponse> for Credential {
    fn from(resp: LoginResponse) -> Self {
        Self::new(resp.token, resp.user, resp.expires_at)
    }
}
