//! Quiz Generator Backend · server entry point
//!
//! Important env variables (a local `.env` file is honored):
//!   PORT               : u16 (default 5000)
//!   GROQ_API_KEY       : required; the server exits without it
//!   GROQ_BASE_URL      : default "https://api.groq.com/openai/v1"
//!   GROQ_MODEL         : default "llama-3.1-8b-instant"
//!   QUIZ_CONFIG_PATH   : path to TOML prompt overrides
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT         : "pretty" (default) or "json"

use std::{net::SocketAddr, process::ExitCode, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};

use quizgen_backend::{build_router, config::Settings, telemetry, AppState};

#[tokio::main]
async fn main() -> ExitCode {
  telemetry::init_tracing();

  match run().await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!(target: "quizgen_backend", error = %e, "Server stopped with an error");
      ExitCode::FAILURE
    }
  }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
  let settings = Settings::from_env()?;

  // Running as the server requires a working client; the library path tolerates its absence.
  let state = AppState::from_settings(&settings);
  if !state.is_connected() {
    return Err("Failed to initialize Groq client. Make sure GROQ_API_KEY is set.".into());
  }
  let state = Arc::new(state);

  let app = build_router(state);

  let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
  let listener = TcpListener::bind(addr).await?;
  info!(target: "quizgen_backend", %addr, model = %settings.model, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    error!(target: "quizgen_backend", error = %e, "Failed to listen for Ctrl-C");
    std::future::pending::<()>().await;
  }
  info!(target: "quizgen_backend", "Shutdown signal received");
}
