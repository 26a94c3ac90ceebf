//! Liveness endpoint
//!
//! A small HTTP server answering deployment health probes. It shares no
//! state with the bot logic and exists so the hosting platform keeps the
//! process alive.

use std::net::SocketAddr;

use axum::{routing::get, Json, Router};
use chrono::Utc;
use tracing::info;

use crate::utils::errors::Result;

/// Build the probe router.
pub fn router() -> Router {
    Router::new().route("/", get(home)).route("/health", get(health))
}

/// Serve liveness probes until the process exits.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "Liveness endpoint listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "Bot is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
