//! Client configuration

use crate::{ClientError, ClientResult};
use shared::Locale;
use std::time::Duration;

/// Default backend used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration for connecting to the marketplace API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.marche.ma")
    pub base_url: String,

    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,

    /// Language of user-facing error messages
    pub locale: Locale,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            locale: Locale::default(),
            user_agent: concat!("marche-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Load from `MARCHE_API_URL`, `MARCHE_TIMEOUT_SECS` and
    /// `MARCHE_LOCALE`, reading a `.env` file first if one exists.
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenv::dotenv();

        let base_url =
            std::env::var("MARCHE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var("MARCHE_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("MARCHE_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config = config.with_timeout(secs);
        }

        if let Ok(raw) = std::env::var("MARCHE_LOCALE") {
            let locale = raw.parse::<Locale>().map_err(ClientError::Config)?;
            config = config.with_locale(locale);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    /// Set the message language
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the `User-Agent` header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reject base URLs the network transport could never reach
    pub fn validate(&self) -> ClientResult<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {}: {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
        assert_eq!(config.locale, Locale::Fr);
        assert!(config.user_agent.starts_with("marche-client/"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://api.marche.ma/")
            .with_timeout(15)
            .with_locale(Locale::En)
            .with_user_agent("courier-app/2.1");
        assert_eq!(config.base_url, "https://api.marche.ma");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.user_agent, "courier-app/2.1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::new("ftp://files.marche.ma").validate().is_err());
    }
}
