//! Deployment smoke endpoint.
//!
//! A standalone server that answers every request with a fixed success
//! payload. It exists to prove the deployment pipeline and ingress work
//! before the real API is wired up, and shares no state with it.
//!
//! Usage:
//!   cargo run --bin pipeline_smoke
//!
//! Environment:
//!   SMOKE_PORT - listen port, defaults to 3001

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Success! The CI/CD pipeline is working." }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let port = std::env::var("SMOKE_PORT").unwrap_or_else(|_| "3001".to_string());

    let app = Router::new().route("/", get(hello));

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Smoke endpoint listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
