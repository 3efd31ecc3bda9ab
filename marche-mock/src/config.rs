//! Mock backend configuration (environment variables)

use crate::state::DEFAULT_TOKEN_TTL_HOURS;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`MARCHE_MOCK_PORT`, default 8080)
    pub port: u16,
    /// Issued token lifetime in hours (`MARCHE_MOCK_TOKEN_TTL_HOURS`)
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("MARCHE_MOCK_PORT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(8080),
            token_ttl_hours: std::env::var("MARCHE_MOCK_TOKEN_TTL_HOURS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|h: &i64| *h > 0)
                .unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
        }
    }
}
