//! Cart endpoints

use super::{RepoContext, require_id, validate};
use crate::ClientResult;
use shared::models::{AddCartItem, Cart, CheckoutRequest, Order, UpdateCartItem};

#[derive(Debug, Clone)]
pub struct CartRepository {
    ctx: RepoContext,
}

impl CartRepository {
    pub fn new(ctx: RepoContext) -> Self {
        Self { ctx }
    }

    pub async fn get(&self) -> ClientResult<Cart> {
        let cred = self.ctx.require_credential()?;
        self.ctx.api().get("/api/cart", Some(cred)).await
    }

    pub async fn add(&self, product_id: &str, quantity: u32) -> ClientResult<Cart> {
        let req = AddCartItem {
            product_id: product_id.to_string(),
            quantity,
        };
        validate(&req)?;
        let cred = self.ctx.require_credential()?;
        self.ctx.api().post("/api/cart/items", &req, Some(cred)).await
    }

    pub async fn update_quantity(&self, product_id: &str, quantity: u32) -> ClientResult<Cart> {
        require_id("product_id", product_id)?;
        let req = UpdateCartItem { quantity };
        validate(&req)?;
        let cred = self.ctx.require_credential()?;
        self.ctx
            .api()
            .patch(&format!("/api/cart/items/{}", product_id), &req, Some(cred))
            .await
    }

    pub async fn remove(&self, product_id: &str) -> ClientResult<Cart> {
        require_id("product_id", product_id)?;
        let cred = self.ctx.require_credential()?;
        self.ctx
            .api()
            .delete(&format!("/api/cart/items/{}", product_id), Some(cred))
            .await
    }

    /// Turn the cart into an order; the server prices it
    pub async fn checkout(&self, delivery_address: &str) -> ClientResult<Order> {
        let req = CheckoutRequest {
            delivery_address: delivery_address.trim().to_string(),
        };
        validate(&req)?;
        let cred = self.ctx.require_credential()?;
        let order: Order = self.ctx.api().post("/api/cart/checkout", &req, Some(cred)).await?;
        tracing::info!(order = %order.id, total = %order.total_amount, "Checkout completed");
        Ok(order)
    }
}
