//! Network transport over reqwest

use super::{ApiReply, ApiRequest, HttpClient};
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiReply> {
        let mut req = self
            .client
            .request(request.method, self.url(&request.path))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(auth) = request.authorization {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(body) = request.body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(ApiReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = NetworkHttpClient::new(&ClientConfig::new("https://api.marche.ma/")).unwrap();
        assert_eq!(client.base_url(), "https://api.marche.ma");
        assert_eq!(client.url("/api/orders"), "https://api.marche.ma/api/orders");
        assert_eq!(client.url("api/bons"), "https://api.marche.ma/api/bons");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = NetworkHttpClient::new(&ClientConfig::new("marche")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
