//! Pillion server binary.
//!
//! Reads configuration from the environment, builds the vendor
//! adapters, and serves the REST API. Run with no environment at all
//! for a fully mocked development server on `0.0.0.0:5000`.

use pillion_server::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let addr = config.listen_addr();

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("failed to build provider adapters: {err}");
            std::process::exit(1);
        }
    };

    let app = router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!("pillion server listening on {addr}");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {err}");
        std::process::exit(1);
    }
}
