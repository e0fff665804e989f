//! # greffe-api — Binary Entry Point
//!
//! Starts the Axum HTTP server over a fresh in-memory registry.
//!
//! Environment:
//! - `GREFFE_LISTEN` — socket address to bind (default `0.0.0.0:8080`).
//! - `GREFFE_LOG` — tracing filter directive (default `info`).

use greffe_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("GREFFE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let addr: std::net::SocketAddr = std::env::var("GREFFE_LISTEN")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;

    let app = greffe_api::app(AppState::new());

    tracing::info!("greffe API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
