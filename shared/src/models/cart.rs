//! Cart models

use crate::validation::{FieldErrors, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price in currency unit
    pub unit_price: Decimal,
}

impl CartItem {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    /// Total computed by the server
    pub total_amount: Decimal,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// POST `/api/cart/items` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddCartItem {
    pub product_id: String,
    pub quantity: u32,
}

impl Validate for AddCartItem {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_non_empty("product_id", &self.product_id);
        errors.require_range("quantity", self.quantity, 1, 99);
        errors.into_result()
    }
}

/// PATCH `/api/cart/items/{product_id}` payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCartItem {
    pub quantity: u32,
}

impl Validate for UpdateCartItem {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_range("quantity", self.quantity, 1, 99);
        errors.into_result()
    }
}

/// POST `/api/cart/checkout` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub delivery_address: String,
}

impl Validate for CheckoutRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_non_empty("delivery_address", &self.delivery_address);
        errors.into_result()
    }
}
