//! Quiz Generator Backend
//!
//! - Axum HTTP API producing multiple-choice quizzes on demand
//! - Questions generated by Groq (OpenAI-compatible chat completions)
//! - Per-question validation with a static fallback so every quiz is complete
//!
//! The binary in `main.rs` refuses to start without a usable `GROQ_API_KEY`;
//! embedding the router through this library keeps serving with
//! `groq_connected: false` instead.

pub mod config;
pub mod domain;
pub mod error;
pub mod groq;
pub mod protocol;
pub mod quiz;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod util;

pub use routes::build_router;
pub use state::AppState;
