//! Marché Client - HTTP client for the marketplace API
//!
//! Provides the repository facade over the REST API and the per-role
//! status state holders that keep orders and delivery bons in sync with
//! the server.

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod http;
pub mod repository;
pub mod resource;
pub mod state;

pub use client::{MarcheClient, Session};
pub use config::ClientConfig;
pub use credential::Credential;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use crate::http::{ApiClient, HttpClient, NetworkHttpClient, OneshotHttpClient};
pub use resource::{Resource, track};
pub use state::{
    CancelOrder, ClientOrders, CourierBons, MissionBoard, StatusStore, StoreState, VendorOrders,
};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, UserInfo};
pub use shared::{Label, Locale};
