mod catalog;
mod config;
mod profile;
mod relay;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

use relay::{ContactRelay, EmailJsRelay};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    // Contact relay is non-fatal: the form reports failure if config is missing.
    let relay: Option<Arc<dyn ContactRelay>> = match EmailJsRelay::from_env() {
        Ok(relay) => {
            tracing::info!(endpoint = %relay.endpoint(), "contact relay initialized");
            Some(Arc::new(relay))
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact relay not configured; contact form disabled");
            None
        }
    };

    let state = state::AppState::new(relay);
    let app = routes::app(state, &config.assets_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
