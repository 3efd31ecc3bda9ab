//! Per-role snapshot sources backed by the repository facade

use super::SnapshotSource;
use crate::ClientResult;
use crate::repository::{DeliveryRepository, OrderRepository};
use async_trait::async_trait;
use shared::models::{BonAction, DeliveryBon, Order, OrderStatus};
use shared::{FieldErrors, Validate};

/// The only transition a client may request on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelOrder;

/// Client role: own orders, cancel only
#[derive(Debug, Clone)]
pub struct ClientOrderSource {
    orders: OrderRepository,
}

impl ClientOrderSource {
    pub fn new(orders: OrderRepository) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl SnapshotSource for ClientOrderSource {
    type Item = Order;
    type Action = CancelOrder;

    async fn fetch_all(&self) -> ClientResult<Vec<Order>> {
        self.orders.list_mine().await
    }

    async fn transition(&self, id: &str, _action: &CancelOrder) -> ClientResult<Order> {
        self.orders.cancel(id).await
    }
}

/// Vendor role: boutique orders, moved to a target status
#[derive(Debug, Clone)]
pub struct VendorOrderSource {
    orders: OrderRepository,
}

impl VendorOrderSource {
    pub fn new(orders: OrderRepository) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl SnapshotSource for VendorOrderSource {
    type Item = Order;
    type Action = OrderStatus;

    async fn fetch_all(&self) -> ClientResult<Vec<Order>> {
        self.orders.list_for_vendor().await
    }

    async fn transition(&self, id: &str, target: &OrderStatus) -> ClientResult<Order> {
        self.orders.update_status(id, *target).await
    }

    fn check(&self, target: &OrderStatus) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if *target == OrderStatus::Pending {
            errors.add("status", "status cannot be set back to PENDING");
        }
        errors.into_result()
    }
}

/// Courier role: assigned bons, pickup / deliver / fail
#[derive(Debug, Clone)]
pub struct CourierBonSource {
    bons: DeliveryRepository,
}

impl CourierBonSource {
    pub fn new(bons: DeliveryRepository) -> Self {
        Self { bons }
    }
}

#[async_trait]
impl SnapshotSource for CourierBonSource {
    type Item = DeliveryBon;
    type Action = BonAction;

    async fn fetch_all(&self) -> ClientResult<Vec<DeliveryBon>> {
        self.bons.list().await
    }

    async fn transition(&self, id: &str, action: &BonAction) -> ClientResult<DeliveryBon> {
        self.bons.apply(id, action).await
    }

    fn check(&self, action: &BonAction) -> Result<(), FieldErrors> {
        action.validate()
    }
}
