//! Catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vendor storefront
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Boutique {
    pub id: String,
    pub name: String,
    pub vendor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub address: String,
}

/// Product listed by a boutique
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub boutique_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in currency unit
    pub price: Decimal,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Average review rating, absent until the first review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Query for `GET /api/products`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boutique_id: Option<String>,
    /// Case-insensitive name search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl ProductQuery {
    pub fn boutique(id: impl Into<String>) -> Self {
        Self {
            boutique_id: Some(id.into()),
            q: None,
        }
    }

    pub fn search(q: impl Into<String>) -> Self {
        Self {
            boutique_id: None,
            q: Some(q.into()),
        }
    }

    /// Whether `product` passes this query
    pub fn matches(&self, product: &Product) -> bool {
        let boutique_ok = self
            .boutique_id
            .as_deref()
            .is_none_or(|b| product.boutique_id == b);
        let text_ok = self.q.as_deref().map(str::trim).is_none_or(|q| {
            q.is_empty() || product.name.to_lowercase().contains(&q.to_lowercase())
        });
        boutique_ok && text_ok
    }
}
