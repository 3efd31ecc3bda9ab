//! Mission endpoints

use super::{RepoContext, require_id};
use crate::ClientResult;
use shared::models::{DeliveryBon, Mission};

#[derive(Debug, Clone)]
pub struct MissionRepository {
    ctx: RepoContext,
}

impl MissionRepository {
    pub fn new(ctx: RepoContext) -> Self {
        Self { ctx }
    }

    /// Missions currently offered to couriers
    pub async fn list(&self) -> ClientResult<Vec<Mission>> {
        let cred = self.ctx.require_credential()?;
        self.ctx.api().get("/api/missions", Some(cred)).await
    }

    /// Take the mission; the server returns the now-assigned bon
    pub async fn accept(&self, bon_id: &str) -> ClientResult<DeliveryBon> {
        require_id("bon_id", bon_id)?;
        let cred = self.ctx.require_credential()?;
        self.ctx
            .api()
            .post_empty(&format!("/api/missions/{}/accept", bon_id), Some(cred))
            .await
    }

    /// Decline the mission (no content on success)
    pub async fn refuse(&self, bon_id: &str) -> ClientResult<()> {
        require_id("bon_id", bon_id)?;
        let cred = self.ctx.require_credential()?;
        self.ctx
            .api()
            .post_empty(&format!("/api/missions/{}/refuse", bon_id), Some(cred))
            .await
    }
}
