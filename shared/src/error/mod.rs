//! Error codes and the wire error body
//!
//! - [`ErrorCode`]: numeric codes shared by backend and clients
//! - [`ErrorBody`]: JSON body of every non-2xx reply
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorBody, ErrorCode};
//!
//! let body = ErrorBody::new(ErrorCode::BonNotFound).with_detail("bon_id", "b-42");
//! assert_eq!(body.code, Some(5001));
//! assert_eq!(body.message, "Delivery bon not found");
//! ```

mod codes;
mod http;

pub use codes::{ErrorCode, InvalidErrorCode};

use crate::validation::FieldErrors;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Error body returned by the API on any non-2xx status
///
/// Every field except `message` is optional on read, since clients must
/// cope with proxies and gateways that answer with their own shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric [`ErrorCode`], kept raw so unknown codes still parse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Structured context (per-field messages for validation failures)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ErrorBody {
    /// Body with the default message for `code`
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    /// Body with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.code()),
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Validation failure carrying one detail per offending field
    pub fn validation(errors: &FieldErrors) -> Self {
        let mut body = Self::with_message(ErrorCode::ValidationFailed, errors.to_string());
        for (field, message) in errors.iter() {
            body = body.with_detail(field, message);
        }
        body
    }

    /// Typed error code, if the server sent a known one
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.code.and_then(|c| ErrorCode::try_from(c).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_parses_without_code() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(body.code, None);
        assert_eq!(body.error_code(), None);
        assert_eq!(body.message, "boom");
    }

    #[test]
    fn test_error_body_unknown_code_kept_raw() {
        let body: ErrorBody = serde_json::from_str(r#"{"code":7777,"message":"x"}"#).unwrap();
        assert_eq!(body.code, Some(7777));
        assert_eq!(body.error_code(), None);
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.add("reason", "Reason is required");
        let body = ErrorBody::validation(&errors);
        assert_eq!(body.error_code(), Some(ErrorCode::ValidationFailed));
        let details = body.details.unwrap();
        assert_eq!(details["reason"], "Reason is required");
    }
}
