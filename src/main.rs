//! MockMate · Mock-Interview Practice Backend
//!
//! - Axum HTTP API: question issuance, sessions, scoring, history
//! - Optional sentiment-assisted scoring (via environment variables)
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT          : u16 (default 3000)
//!   SENTIMENT_API_TOKEN  : enables sentiment-assisted scoring if present
//!   SENTIMENT_API_URL    : default "https://api-inference.huggingface.co/models"
//!   SENTIMENT_MODEL      : default "cardiffnlp/twitter-roberta-base-sentiment-latest"
//!   BANK_CONFIG_PATH     : path to TOML config (extra curated questions)
//!   LOG_LEVEL     : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT    : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod bank;
mod compose;
mod fallback;
mod scoring;
mod sentiment;
mod session;
mod state;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (question banks, stores, sentiment client).
  let state = Arc::new(AppState::new());

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "mockmate_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
