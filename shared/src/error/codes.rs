//! Error codes shared by the marketplace backend and its clients
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Delivery errors
//! - 6xxx: Catalog and cart errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use thiserror::Error;
use std::fmt;

/// Marketplace error code
///
/// Serialized as a bare `u16` so the wire format stays stable across
/// client platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order status change not allowed from the current status
    OrderInvalidTransition = 4002,
    /// Cart is empty at checkout
    OrderEmptyCart = 4003,

    // ==================== 5xxx: Delivery ====================
    /// Delivery bon not found
    BonNotFound = 5001,
    /// Bon status change not allowed from the current status
    BonInvalidTransition = 5002,
    /// Mission not found or no longer offered
    MissionNotFound = 5003,
    /// Mission already taken by another courier
    MissionTaken = 5004,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Boutique not found
    BoutiqueNotFound = 6002,
    /// Not enough stock for the requested quantity
    OutOfStock = 6003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Numeric value of the code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message for the code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Unknown => "An unknown error occurred",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Invalid token",

            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "This action requires a different role",

            Self::OrderNotFound => "Order not found",
            Self::OrderInvalidTransition => "Order status cannot change this way",
            Self::OrderEmptyCart => "Cart is empty",

            Self::BonNotFound => "Delivery bon not found",
            Self::BonInvalidTransition => "Delivery status cannot change this way",
            Self::MissionNotFound => "Mission not found",
            Self::MissionTaken => "Mission already accepted by another courier",

            Self::ProductNotFound => "Product not found",
            Self::BoutiqueNotFound => "Boutique not found",
            Self::OutOfStock => "Not enough stock",

            Self::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            2001 => Self::PermissionDenied,
            2002 => Self::RoleRequired,
            4001 => Self::OrderNotFound,
            4002 => Self::OrderInvalidTransition,
            4003 => Self::OrderEmptyCart,
            5001 => Self::BonNotFound,
            5002 => Self::BonInvalidTransition,
            5003 => Self::MissionNotFound,
            5004 => Self::MissionTaken,
            6001 => Self::ProductNotFound,
            6002 => Self::BoutiqueNotFound,
            6003 => Self::OutOfStock,
            9001 => Self::InternalError,
            _ => return Err(InvalidErrorCode(value)),
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_roundtrips_known_codes() {
        for code in [
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotAuthenticated,
            ErrorCode::OrderInvalidTransition,
            ErrorCode::BonNotFound,
            ErrorCode::MissionTaken,
            ErrorCode::OutOfStock,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
        assert_eq!(
            InvalidErrorCode(4999).to_string(),
            "invalid error code: 4999"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::BonNotFound).unwrap();
        assert_eq!(json, "5001");
        let back: ErrorCode = serde_json::from_str("4002").unwrap();
        assert_eq!(back, ErrorCode::OrderInvalidTransition);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::Unknown.to_string(), "E0001");
        assert_eq!(ErrorCode::OrderNotFound.to_string(), "E4001");
    }

    #[test]
    fn test_messages_not_empty() {
        assert!(!ErrorCode::MissionNotFound.message().is_empty());
        assert!(ErrorCode::try_from(0).is_err());
    }
}
