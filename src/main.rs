//! FoodTrace web host: server-renders the Leptos client and serves its
//! WASM bundle for hydration.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "foodtrace exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::leptos_app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|source| ServerError::Bind { addr: config.bind_addr(), source })?;

    tracing::info!(addr = %config.bind_addr(), "foodtrace listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
