//! In-process transport
//!
//! Calls an axum `Router` through Tower's `oneshot`, without a socket.
//! Used to embed a backend in the same process and to drive tests.

use super::{ApiReply, ApiRequest, HttpClient};
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use tower::ServiceExt;

/// Oneshot HTTP client (in-memory calls)
///
/// # Example
///
/// ```ignore
/// let client = OneshotHttpClient::new(marche_mock::router(state));
/// let marche = MarcheClient::with_transport(Arc::new(client), ClientConfig::default());
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(request: ApiRequest) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder()
            .method(request.method)
            .uri(request.path)
            .header(http::header::ACCEPT, "application/json");
        if let Some(auth) = request.authorization {
            builder = builder.header(http::header::AUTHORIZATION, auth);
        }
        let body = match request.body {
            Some(bytes) => {
                builder = builder.header(http::header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        builder
            .body(body)
            .map_err(|e| ClientError::Transport(format!("Failed to build request: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiReply> {
        let request = Self::build_request(request)?;
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Transport(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read body: {}", e)))?;
        Ok(ApiReply {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use http::{Method, StatusCode};

    fn request(path: &str) -> ApiRequest {
        ApiRequest {
            method: Method::GET,
            path: path.to_string(),
            body: None,
            authorization: Some("Bearer t".into()),
        }
    }

    #[tokio::test]
    async fn test_oneshot_roundtrip() {
        let router = Router::new().route(
            "/ping",
            get(|headers: http::HeaderMap| async move {
                headers
                    .get(http::header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );
        let client = OneshotHttpClient::new(router);

        let reply = client.execute(request("/ping")).await.unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, b"Bearer t");

        let reply = client.execute(request("/missing")).await.unwrap();
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
    }
}
