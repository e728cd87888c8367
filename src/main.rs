mod api_client;
mod config;
mod history;
mod models;
mod render;
mod routes;
mod services;
mod state;

use axum::{routing::get, Router};
use config::Config;
use state::AppState;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let state = AppState::new(config.history_capacity);

    // Spawn price polling task
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let api_client =
        api_client::ApiClient::new(config.price_api_url.clone(), config.request_timeout());
    let polling_state = state.clone();
    let poll_interval = config.poll_interval;
    let poller = tokio::spawn(async move {
        services::price_service::run_price_polling(
            polling_state,
            api_client,
            poll_interval,
            shutdown_rx,
        )
        .await;
    });

    let app = Router::new()
        .route("/", get(routes::price::get_price))
        .route("/health", get(routes::health::get_health))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    // The only fatal path: a port we cannot bind.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
    }

    // Stop the poller before the process exits.
    let _ = shutdown_tx.send(true);
    let _ = poller.await;
    tracing::info!("Shutdown complete");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
