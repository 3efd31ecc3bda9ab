//! Auth types shared between the backend and clients

use crate::models::Role;
use crate::validation::{FieldErrors, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_non_empty("email", &self.email);
        errors.require_email("email", &self.email);
        errors.require_non_empty("password", &self.password);
        errors.into_result()
    }
}

/// Account creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_non_empty("name", &self.name);
        errors.require_non_empty("email", &self.email);
        errors.require_email("email", &self.email);
        errors.require_min_len("password", &self.password, 6);
        if let Some(phone) = &self.phone
            && !phone
                .chars()
                .all(|c| c.is_ascii_digit() || c == '+' || c == ' ')
        {
            errors.add("phone", "phone must contain digits only");
        }
        errors.into_result()
    }
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Absent when the server issues non-expiring tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Boutique managed by a vendor account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boutique_id: Option<String>,
}
