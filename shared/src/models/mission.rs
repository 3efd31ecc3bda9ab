//! Mission model
//!
//! A mission is an unassigned delivery bon offered to couriers. It only
//! lives as long as the listing that returned it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mission {
    pub bon_id: String,
    pub order_id: String,
    pub pickup_address: String,
    pub delivery_address: String,
    /// Courier fee in currency unit
    pub fee: Decimal,
    pub offered_at: DateTime<Utc>,
}
