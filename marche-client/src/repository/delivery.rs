//! Delivery bon endpoints

use super::{RepoContext, require_id, validate};
use crate::ClientResult;
use shared::models::{BonAction, DeliveryBon, FailBonRequest};

#[derive(Debug, Clone)]
pub struct DeliveryRepository {
    ctx: RepoContext,
}

impl DeliveryRepository {
    pub fn new(ctx: RepoContext) -> Self {
        Self { ctx }
    }

    /// Bons assigned to the signed-in courier
    pub async fn list(&self) -> ClientResult<Vec<DeliveryBon>> {
        let cred = self.ctx.require_credential()?;
        self.ctx.api().get("/api/bons", Some(cred)).await
    }

    pub async fn pickup(&self, id: &str) -> ClientResult<DeliveryBon> {
        self.apply(id, &BonAction::Pickup).await
    }

    pub async fn deliver(&self, id: &str) -> ClientResult<DeliveryBon> {
        self.apply(id, &BonAction::Deliver).await
    }

    pub async fn fail(&self, id: &str, reason: &str) -> ClientResult<DeliveryBon> {
        self.apply(
            id,
            &BonAction::Fail {
                reason: reason.to_string(),
            },
        )
        .await
    }

    /// Send a courier action; the returned bon carries the server's status
    pub async fn apply(&self, id: &str, action: &BonAction) -> ClientResult<DeliveryBon> {
        require_id("bon_id", id)?;
        validate(action)?;
        let cred = self.ctx.require_credential()?;
        let path = format!("/api/bons/{}/{}", id, action.endpoint());
        match action {
            BonAction::Fail { reason } => {
                let body = FailBonRequest {
                    reason: reason.trim().to_string(),
                };
                self.ctx.api().post(&path, &body, Some(cred)).await
            }
            BonAction::Pickup | BonAction::Deliver => {
                self.ctx.api().post_empty(&path, Some(cred)).await
            }
        }
    }
}
