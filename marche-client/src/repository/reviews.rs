//! Review endpoints

use super::{RepoContext, require_id, validate};
use crate::ClientResult;
use shared::models::{Review, ReviewRequest};

#[derive(Debug, Clone)]
pub struct ReviewRepository {
    ctx: RepoContext,
}

impl ReviewRepository {
    pub fn new(ctx: RepoContext) -> Self {
        Self { ctx }
    }

    pub async fn list(&self, product_id: &str) -> ClientResult<Vec<Review>> {
        require_id("product_id", product_id)?;
        self.ctx
            .api()
            .get(
                &format!("/api/products/{}/reviews", product_id),
                self.ctx.optional_credential(),
            )
            .await
    }

    pub async fn post(&self, product_id: &str, req: &ReviewRequest) -> ClientResult<Review> {
        require_id("product_id", product_id)?;
        validate(req)?;
        let cred = self.ctx.require_credential()?;
        self.ctx
            .api()
            .post(&format!("/api/products/{}/reviews", product_id), req, Some(cred))
            .await
    }
}
