use anyhow::Context;
use chrono::Duration;
use marche_mock::config::Config;
use marche_mock::{AppState, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marche_mock=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    let state = AppState::new(seed::demo()).with_token_ttl(Duration::hours(config.token_ttl_hours));
    let app = marche_mock::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("marche-mock listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
