//! Order endpoints

use super::{RepoContext, require_id};
use crate::ClientResult;
use shared::models::{Order, OrderStatus, OrderStatusUpdate};

#[derive(Debug, Clone)]
pub struct OrderRepository {
    ctx: RepoContext,
}

impl OrderRepository {
    pub fn new(ctx: RepoContext) -> Self {
        Self { ctx }
    }

    /// Orders placed by the signed-in client
    pub async fn list_mine(&self) -> ClientResult<Vec<Order>> {
        let cred = self.ctx.require_credential()?;
        self.ctx.api().get("/api/orders", Some(cred)).await
    }

    /// Orders received by the signed-in vendor's boutique
    pub async fn list_for_vendor(&self) -> ClientResult<Vec<Order>> {
        let cred = self.ctx.require_credential()?;
        self.ctx.api().get("/api/vendor/orders", Some(cred)).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        require_id("order_id", id)?;
        let cred = self.ctx.require_credential()?;
        self.ctx
            .api()
            .get(&format!("/api/orders/{}", id), Some(cred))
            .await
    }

    /// Ask the server to move the order to `status`
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        require_id("order_id", id)?;
        let cred = self.ctx.require_credential()?;
        self.ctx
            .api()
            .patch(
                &format!("/api/orders/{}/status", id),
                &OrderStatusUpdate { status },
                Some(cred),
            )
            .await
    }

    pub async fn cancel(&self, id: &str) -> ClientResult<Order> {
        self.update_status(id, OrderStatus::Cancelled).await
    }
}
