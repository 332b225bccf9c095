//! Income tax API server.
//!
//! Reads configuration from `INCOME_TAX_CONFIG` and the environment, builds
//! the configured bracket provider and serves the HTTP API until Ctrl-C.

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use income_tax::api::{AppState, create_router};
use income_tax::config::ConfigLoader;
use income_tax::provider::provider_from_config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "income_tax=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConfigLoader::from_env()?.into_config();
    info!(
        provider = ?config.provider.kind,
        base_url = %config.provider.base_url,
        "Starting income tax server"
    );

    let provider = provider_from_config(&config.provider)?;
    let app = create_router(AppState::from_provider(provider)).layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
