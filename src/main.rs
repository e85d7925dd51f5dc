//! Phone scoring service — binary entrypoint.
//! Boots the Axum HTTP server with the scoring routes and the Prometheus endpoint.

use anyhow::Context;
use std::net::SocketAddr;
use tracing::info;

use phone_score::{api, metrics::Metrics, telemetry};

const ENV_ADDR: &str = "PHONE_SCORE_ADDR";
const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    telemetry::init();

    let metrics = Metrics::init()?;
    let state = api::AppState::from_env()?;
    let app = api::router(state).merge(metrics.router());

    let addr_raw = std::env::var(ENV_ADDR).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = addr_raw
        .parse()
        .with_context(|| format!("{ENV_ADDR} must be host:port, got '{addr_raw}'"))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "phone scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
