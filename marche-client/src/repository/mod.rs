//! Repository facade
//!
//! One method per remote endpoint. Protected calls check the credential
//! before anything is sent; local payload validation also runs first.

mod auth;
mod cart;
mod catalog;
mod delivery;
mod missions;
mod notifications;
mod orders;
mod reviews;

pub use auth::AuthRepository;
pub use cart::CartRepository;
pub use catalog::CatalogRepository;
pub use delivery::DeliveryRepository;
pub use missions::MissionRepository;
pub use notifications::NotificationRepository;
pub use orders::OrderRepository;
pub use reviews::ReviewRepository;

use crate::credential::Credential;
use crate::http::ApiClient;
use crate::{ClientError, ClientResult};
use shared::Validate;
use std::sync::Arc;

/// Transport plus the (optional) session credential
#[derive(Debug, Clone)]
pub struct RepoContext {
    api: ApiClient,
    credential: Option<Arc<Credential>>,
}

impl RepoContext {
    pub fn new(api: ApiClient, credential: Option<Arc<Credential>>) -> Self {
        Self { api, credential }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_deref()
    }

    /// Credential for a protected call
    pub fn require_credential(&self) -> ClientResult<&Credential> {
        let credential = self.credential().ok_or(ClientError::NotLoggedIn)?;
        if credential.is_expired() {
            return Err(ClientError::SessionExpired);
        }
        Ok(credential)
    }

    /// Credential when present and still valid, for public endpoints
    pub fn optional_credential(&self) -> Option<&Credential> {
        self.credential().filter(|c| !c.is_expired())
    }
}

/// Run local validation, turning failures into [`ClientError::Validation`]
pub(crate) fn validate<T: Validate>(payload: &T) -> ClientResult<()> {
    payload.validate().map_err(ClientError::Validation)
}

/// Reject empty path identifiers before they become `/api/orders//status`
pub(crate) fn require_id(field: &str, id: &str) -> ClientResult<()> {
    let mut errors = shared::FieldErrors::new();
    errors.require_non_empty(field, id);
    if id.contains('/') {
        errors.add(field, format!("{} is not a valid identifier", field));
    }
    errors.into_result().map_err(ClientError::Validation)
}
