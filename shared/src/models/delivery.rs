//! Delivery bon model (`BonDeLivraison`)

use crate::validation::{FieldErrors, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery bon status
///
/// Moves forward only: PENDING_PICKUP → IN_TRANSIT → DELIVERED, or to
/// FAILED from either non-terminal status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonStatus {
    #[default]
    PendingPickup,
    InTransit,
    Delivered,
    Failed,
}

impl BonStatus {
    pub const ALL: [BonStatus; 4] = [
        Self::PendingPickup,
        Self::InTransit,
        Self::Delivered,
        Self::Failed,
    ];

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Failed)
    }

    pub fn can_transition_to(&self, target: BonStatus) -> bool {
        match (self, target) {
            (Self::PendingPickup, Self::InTransit) => true,
            (Self::InTransit, Self::Delivered) => true,
            (from, Self::Failed) => !from.is_terminal(),
            _ => false,
        }
    }
}

/// Courier-side action on a bon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BonAction {
    Pickup,
    Deliver,
    Fail { reason: String },
}

impl BonAction {
    /// Status the server moves the bon to on success
    pub fn target(&self) -> BonStatus {
        match self {
            Self::Pickup => BonStatus::InTransit,
            Self::Deliver => BonStatus::Delivered,
            Self::Fail { .. } => BonStatus::Failed,
        }
    }

    /// Path segment under `/api/bons/{id}/`
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Deliver => "deliver",
            Self::Fail { .. } => "fail",
        }
    }
}

impl Validate for BonAction {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Self::Fail { reason } = self {
            errors.require_non_empty("reason", reason);
        }
        errors.into_result()
    }
}

/// Delivery bon entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryBon {
    pub id: String,
    pub status: BonStatus,
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

/// POST `/api/bons/{id}/fail` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailBonRequest {
    pub reason: String,
}

impl Validate for FailBonRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_non_empty("reason", &self.reason);
        errors.into_result()
    }
}
