//! Authentication endpoints

use super::{RepoContext, validate};
use crate::ClientResult;
use crate::credential::Credential;
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

#[derive(Debug, Clone)]
pub struct AuthRepository {
    ctx: RepoContext,
}

impl AuthRepository {
    pub fn new(ctx: RepoContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Credential> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        validate(&req)?;
        let resp: LoginResponse = self.ctx.api().post("/api/auth/login", &req, None).await?;
        tracing::info!(user = %resp.user.id, role = %resp.user.role, "Logged in");
        Ok(resp.into())
    }

    /// Create an account and sign it in
    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<Credential> {
        validate(req)?;
        let resp: LoginResponse = self.ctx.api().post("/api/auth/register", req, None).await?;
        tracing::info!(user = %resp.user.id, role = %resp.user.role, "Account registered");
        Ok(resp.into())
    }

    /// Account behind the current credential
    pub async fn me(&self) -> ClientResult<UserInfo> {
        let cred = self.ctx.require_credential()?;
        self.ctx.api().get("/api/auth/me", Some(cred)).await
    }
}
