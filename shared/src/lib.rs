//! Shared types for the Marché marketplace
//!
//! Wire models, error codes, status labels and field validation used by
//! both the client library and the backend.

pub mod client;
pub mod error;
pub mod labels;
pub mod models;
pub mod validation;

// Re-exports
pub use error::{ErrorBody, ErrorCode};
pub use labels::{Label, Locale};
pub use serde::{Deserialize, Serialize};
pub use validation::{FieldErrors, Validate};
