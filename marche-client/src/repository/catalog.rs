//! Catalog endpoints (public; a valid credential is attached when present)

use super::{RepoContext, require_id};
use crate::ClientResult;
use crate::http::with_query;
use shared::models::{Boutique, Product, ProductQuery};

#[derive(Debug, Clone)]
pub struct CatalogRepository {
    ctx: RepoContext,
}

impl CatalogRepository {
    pub fn new(ctx: RepoContext) -> Self {
        Self { ctx }
    }

    pub async fn boutiques(&self) -> ClientResult<Vec<Boutique>> {
        self.ctx
            .api()
            .get("/api/boutiques", self.ctx.optional_credential())
            .await
    }

    pub async fn products(&self, query: &ProductQuery) -> ClientResult<Vec<Product>> {
        let q = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
        let path = with_query(
            "/api/products",
            &[("boutique_id", query.boutique_id.as_deref()), ("q", q)],
        );
        self.ctx.api().get(&path, self.ctx.optional_credential()).await
    }

    pub async fn product(&self, id: &str) -> ClientResult<Product> {
        require_id("product_id", id)?;
        self.ctx
            .api()
            .get(&format!("/api/products/{}", id), self.ctx.optional_credential())
            .await
    }
}
