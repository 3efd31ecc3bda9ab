//! Status display labels
//!
//! Pure lookup from status enums to display strings, with no UI
//! framework attached.

use crate::models::{BonStatus, NotificationKind, OrderStatus, Role};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" | "fr_fr" => Ok(Self::Fr),
            "en" | "en-us" | "en_us" | "en-gb" => Ok(Self::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Anything with a localized display label
pub trait Label {
    fn label(&self, locale: Locale) -> &'static str;
}

impl Label for OrderStatus {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Pending, Locale::Fr) => "En attente",
            (Self::Processing, Locale::Fr) => "En préparation",
            (Self::Ready, Locale::Fr) => "Prête",
            (Self::Shipped, Locale::Fr) => "Expédiée",
            (Self::Delivered, Locale::Fr) => "Livrée",
            (Self::Cancelled, Locale::Fr) => "Annulée",
            (Self::Returned, Locale::Fr) => "Retournée",
            (Self::Pending, Locale::En) => "Pending",
            (Self::Processing, Locale::En) => "Processing",
            (Self::Ready, Locale::En) => "Ready",
            (Self::Shipped, Locale::En) => "Shipped",
            (Self::Delivered, Locale::En) => "Delivered",
            (Self::Cancelled, Locale::En) => "Cancelled",
            (Self::Returned, Locale::En) => "Returned",
        }
    }
}

impl Label for BonStatus {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::PendingPickup, Locale::Fr) => "En attente de ramassage",
            (Self::InTransit, Locale::Fr) => "En cours de livraison",
            (Self::Delivered, Locale::Fr) => "Livré",
            (Self::Failed, Locale::Fr) => "Échec de livraison",
            (Self::PendingPickup, Locale::En) => "Awaiting pickup",
            (Self::InTransit, Locale::En) => "In transit",
            (Self::Delivered, Locale::En) => "Delivered",
            (Self::Failed, Locale::En) => "Delivery failed",
        }
    }
}

impl Label for Role {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Client, Locale::Fr) => "Client",
            (Self::Vendor, Locale::Fr) => "Vendeur",
            (Self::Courier, Locale::Fr) => "Livreur",
            (Self::Client, Locale::En) => "Customer",
            (Self::Vendor, Locale::En) => "Vendor",
            (Self::Courier, Locale::En) => "Courier",
        }
    }
}

impl Label for NotificationKind {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::OrderUpdate, Locale::Fr) => "Commande",
            (Self::DeliveryUpdate, Locale::Fr) => "Livraison",
            (Self::NewMission, Locale::Fr) => "Nouvelle mission",
            (Self::Review, Locale::Fr) => "Avis",
            (Self::System, Locale::Fr) => "Système",
            (Self::OrderUpdate, Locale::En) => "Order",
            (Self::DeliveryUpdate, Locale::En) => "Delivery",
            (Self::NewMission, Locale::En) => "New mission",
            (Self::Review, Locale::En) => "Review",
            (Self::System, Locale::En) => "System",
        }
    }
}
