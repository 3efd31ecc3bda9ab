//! Notification endpoints

use super::{RepoContext, require_id};
use crate::ClientResult;
use shared::models::Notification;

#[derive(Debug, Clone)]
pub struct NotificationRepository {
    ctx: RepoContext,
}

impl NotificationRepository {
    pub fn new(ctx: RepoContext) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> ClientResult<Vec<Notification>> {
        let cred = self.ctx.require_credential()?;
        self.ctx.api().get("/api/notifications", Some(cred)).await
    }

    pub async fn mark_read(&self, id: &str) -> ClientResult<Notification> {
        require_id("notification_id", id)?;
        let cred = self.ctx.require_credential()?;
        self.ctx
            .api()
            .post_empty(&format!("/api/notifications/{}/read", id), Some(cred))
            .await
    }
}
