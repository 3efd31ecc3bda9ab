//! Role Model

use serde::{Deserialize, Serialize};

/// Marketplace role of the signed-in account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Buyer browsing boutiques and placing orders
    #[default]
    Client,
    /// Vendeur managing a boutique and its orders
    Vendor,
    /// Livreur picking up and delivering bons
    Courier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "CLIENT",
            Self::Vendor => "VENDOR",
            Self::Courier => "COURIER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
