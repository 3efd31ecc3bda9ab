//! HTTP transport
//!
//! [`HttpClient`] moves raw requests; [`ApiClient`] adds JSON encoding,
//! bearer auth and the uniform error mapping on top of any transport.

mod network;
mod oneshot;

pub use network::NetworkHttpClient;
pub use oneshot::OneshotHttpClient;

use crate::credential::Credential;
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use http::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Transport-level request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path including any query string, e.g. `/api/orders`
    pub path: String,
    /// JSON-encoded body
    pub body: Option<Vec<u8>>,
    /// Full `Authorization` header value
    pub authorization: Option<String>,
}

/// Transport-level reply
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiReply {
    /// Decode a success body, or map the failure to a [`ClientError`].
    ///
    /// An empty success body decodes as JSON `null`, so `()` and
    /// `Option<T>` accept 204 replies.
    pub fn into_result<T: DeserializeOwned>(self) -> ClientResult<T> {
        if !self.status.is_success() {
            return Err(ClientError::from_reply(self.status, &self.body));
        }
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &self.body
        };
        serde_json::from_slice(body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

/// HTTP transport trait
#[async_trait]
pub trait HttpClient: Send + Sync + fmt::Debug {
    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiReply>;
}

/// Typed JSON client over a shared transport
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpClient>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpClient>) -> Self {
        Self { transport }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Option<&Credential>,
    ) -> ClientResult<T> {
        self.send(Method::GET, path, None, auth).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Option<&Credential>,
    ) -> ClientResult<T> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::POST, path, Some(body), auth).await
    }

    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Option<&Credential>,
    ) -> ClientResult<T> {
        self.send(Method::POST, path, None, auth).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Option<&Credential>,
    ) -> ClientResult<T> {
        let body = serde_json::to_vec(body)?;
        self.send(Method::PATCH, path, Some(body), auth).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Option<&Credential>,
    ) -> ClientResult<T> {
        self.send(Method::DELETE, path, None, auth).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        auth: Option<&Credential>,
    ) -> ClientResult<T> {
        let request = ApiRequest {
            method: method.clone(),
            path: path.to_string(),
            body,
            authorization: auth.map(Credential::bearer),
        };
        tracing::debug!(%method, path, "API request");
        let reply = self.transport.execute(request).await.inspect_err(|e| {
            tracing::warn!(%method, path, error = %e, "API transport failed");
        })?;
        let status = reply.status;
        reply.into_result().inspect_err(|e| {
            tracing::warn!(%method, path, status = status.as_u16(), error = %e, "API request rejected");
        })
    }
}

/// Append URL-encoded query pairs to `path`, skipping `None` values
pub fn with_query(path: &str, pairs: &[(&str, Option<&str>)]) -> String {
    let mut serializer = reqwest::Url::parse("http://query.invalid/")
        .expect("static URL parses");
    {
        let mut query = serializer.query_pairs_mut();
        for (key, value) in pairs {
            if let Some(value) = value {
                query.append_pair(key, value);
            }
        }
    }
    match serializer.query() {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path.to_string(),
    }
}
