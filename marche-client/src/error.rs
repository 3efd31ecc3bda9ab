//! Client error types

use http::StatusCode;
use shared::error::{ErrorBody, ErrorCode};
use shared::{FieldErrors, Locale};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No credential was supplied for a protected call
    #[error("Not logged in")]
    NotLoggedIn,

    /// The credential expired before the request was sent
    #[error("Session expired")]
    SessionExpired,

    /// Server rejected the token (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Server rejected the email/password pair (401)
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request conflicts with the current server state (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Local or server-side field validation failure
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// Any other non-2xx reply
    #[error("Request failed ({status}): {message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// In-process transport failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// How an error is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing, expired or rejected session; the user must sign in again
    Session,
    /// Transport or decoding failure; shown as a generic failure
    Network,
    /// Malformed local input, shown next to the offending fields
    Validation,
    /// The server refused the request and said why
    Remote,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotLoggedIn | Self::SessionExpired | Self::Unauthorized(_) => ErrorKind::Session,
            Self::Validation(_) => ErrorKind::Validation,
            Self::InvalidCredentials(_)
            | Self::Forbidden(_)
            | Self::NotFound(_)
            | Self::Conflict(_)
            | Self::Api { .. } => ErrorKind::Remote,
            Self::Http(_)
            | Self::Transport(_)
            | Self::InvalidResponse(_)
            | Self::Serialization(_)
            | Self::Config(_) => ErrorKind::Network,
        }
    }

    /// Per-field messages, for validation failures
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Display string for the user. Never empty.
    pub fn user_message(&self, locale: Locale) -> String {
        match self.kind() {
            ErrorKind::Session => match locale {
                Locale::Fr => "Vous n'êtes pas connecté. Veuillez vous reconnecter.".to_string(),
                Locale::En => "You are not logged in. Please sign in again.".to_string(),
            },
            ErrorKind::Network => match locale {
                Locale::Fr => {
                    "Une erreur est survenue. Vérifiez votre connexion et réessayez.".to_string()
                }
                Locale::En => {
                    "Something went wrong. Check your connection and try again.".to_string()
                }
            },
            ErrorKind::Validation => self
                .field_errors()
                .map(ToString::to_string)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| generic_rejection(locale, None)),
            ErrorKind::Remote => match self.remote_message() {
                Some(message) => message.to_string(),
                None => generic_rejection(locale, self.status()),
            },
        }
    }

    /// HTTP status of a server-side rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) | Self::InvalidCredentials(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn remote_message(&self) -> Option<&str> {
        let message = match self {
            Self::InvalidCredentials(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Conflict(m) => m,
            Self::Api { message, .. } => message,
            _ => return None,
        };
        let message = message.trim();
        (!message.is_empty()).then_some(message)
    }

    /// Map a non-2xx reply to an error, pulling the best message available
    pub(crate) fn from_reply(status: StatusCode, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body).ok();
        let code = parsed.as_ref().and_then(ErrorBody::error_code);
        let message = extract_message(status, body, parsed.as_ref());

        if code == Some(ErrorCode::ValidationFailed)
            && let Some(fields) = parsed.as_ref().and_then(field_errors_from_body)
        {
            return Self::Validation(fields);
        }

        match status {
            StatusCode::UNAUTHORIZED if code == Some(ErrorCode::InvalidCredentials) => {
                Self::InvalidCredentials(message)
            }
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::Api {
                status: status.as_u16(),
                code,
                message,
            },
        }
    }
}

fn generic_rejection(locale: Locale, status: Option<u16>) -> String {
    match (locale, status) {
        (Locale::Fr, Some(s)) => format!("La requête a échoué ({})", s),
        (Locale::Fr, None) => "La requête a échoué".to_string(),
        (Locale::En, Some(s)) => format!("Request failed ({})", s),
        (Locale::En, None) => "Request failed".to_string(),
    }
}

/// Best-effort message: `ErrorBody.message`, then an `error` field, then
/// the raw text, then the canonical reason.
fn extract_message(status: StatusCode, body: &[u8], parsed: Option<&ErrorBody>) -> String {
    if let Some(body) = parsed
        && !body.message.trim().is_empty()
    {
        return body.message.trim().to_string();
    }
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body)
        && let Some(error) = value.get("error").and_then(|e| e.as_str())
        && !error.trim().is_empty()
    {
        return error.trim().to_string();
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

fn field_errors_from_body(body: &ErrorBody) -> Option<FieldErrors> {
    let details = body.details.as_ref()?;
    let mut fields = FieldErrors::new();
    for (field, value) in details {
        if let Some(message) = value.as_str() {
            fields.add(field.clone(), message);
        }
    }
    (!fields.is_empty()).then_some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_server_message() {
        let body = serde_json::to_vec(&ErrorBody::new(ErrorCode::BonNotFound)).unwrap();
        let err = ClientError::from_reply(StatusCode::NOT_FOUND, &body);
        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.user_message(Locale::En), "Delivery bon not found");
    }

    #[test]
    fn test_error_field_fallback() {
        let err = ClientError::from_reply(StatusCode::BAD_GATEWAY, br#"{"error":"upstream down"}"#);
        assert_eq!(err.user_message(Locale::Fr), "upstream down");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_plain_text_and_empty_body() {
        let err = ClientError::from_reply(StatusCode::CONFLICT, b"  already taken \n");
        assert_eq!(err.user_message(Locale::En), "already taken");

        let err = ClientError::from_reply(StatusCode::NOT_FOUND, b"");
        assert_eq!(err.user_message(Locale::En), "Not Found");
    }

    #[test]
    fn test_validation_details_become_field_errors() {
        let mut fields = FieldErrors::new();
        fields.add("reason", "reason is required");
        let body = serde_json::to_vec(&ErrorBody::validation(&fields)).unwrap();
        let err = ClientError::from_reply(StatusCode::BAD_REQUEST, &body);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.field_errors().and_then(|f| f.get("reason")),
            Some("reason is required")
        );
    }

    #[test]
    fn test_session_errors_share_message() {
        let unauthorized = ClientError::from_reply(StatusCode::UNAUTHORIZED, b"");
        assert_eq!(unauthorized.kind(), ErrorKind::Session);
        assert_eq!(
            unauthorized.user_message(Locale::En),
            ClientError::NotLoggedIn.user_message(Locale::En)
        );
        assert_eq!(ClientError::SessionExpired.kind(), ErrorKind::Session);
    }

    #[test]
    fn test_wrong_credentials_keep_server_message() {
        let body = serde_json::to_vec(&ErrorBody::new(ErrorCode::InvalidCredentials)).unwrap();
        let err = ClientError::from_reply(StatusCode::UNAUTHORIZED, &body);
        assert!(matches!(err, ClientError::InvalidCredentials(_)));
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(Locale::En), "Invalid email or password");

        for code in [ErrorCode::TokenExpired, ErrorCode::TokenInvalid, ErrorCode::NotAuthenticated] {
            let body = serde_json::to_vec(&ErrorBody::new(code)).unwrap();
            let err = ClientError::from_reply(StatusCode::UNAUTHORIZED, &body);
            assert_eq!(err.kind(), ErrorKind::Session, "{code:?}");
        }
    }

    #[test]
    fn test_messages_never_empty() {
        let errors = [
            ClientError::NotLoggedIn,
            ClientError::Transport("closed".into()),
            ClientError::Validation(FieldErrors::new()),
            ClientError::Api {
                status: 500,
                code: None,
                message: "   ".into(),
            },
        ];
        for err in errors {
            for locale in [Locale::Fr, Locale::En] {
                assert!(!err.user_message(locale).is_empty(), "{err:?}");
            }
        }
    }
}
