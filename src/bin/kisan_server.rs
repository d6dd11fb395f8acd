// Server binary entry point
//
// Usage: cargo run --bin kisan_server
// Configuration comes from environment variables, see `AppConfig::from_env`.

use kisan_sahay::{create_router, AppConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "kisan_sahay=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting KisanSahay server...");

    let config = AppConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  SOIL_WEATHER_DELAY_MS: {}", config.soil_weather_delay.as_millis());
    tracing::info!("  PREDICTION_DELAY_MS: {}", config.prediction_delay.as_millis());
    tracing::info!("  TOAST_LIMIT: {}", config.toast_policy.limit);
    tracing::info!("  TOAST_TTL_SECS: {}", config.toast_policy.ttl.as_secs());
    tracing::info!("  VIEW_IDLE_SECS: {}", config.view_idle.as_secs());
    tracing::info!("  MAX_MOUNTED_VIEWS: {}", config.max_mounted_views);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
