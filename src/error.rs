//! Error types for question generation, startup configuration and the HTTP layer.

use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::protocol::ErrorOut;

/// Why a single question could not be produced.
///
/// Every variant is recoverable: the quiz assembler swaps in the fallback
/// question and keeps going.
#[derive(Error, Debug)]
pub enum GenerationError {
  #[error("request to model API failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("model API returned HTTP {status}: {message}")]
  Upstream { status: u16, message: String },

  #[error("model returned an empty completion")]
  EmptyCompletion,

  #[error("model output is not valid JSON: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("generated question is missing required fields: {}", .0.join(", "))]
  MissingField(Vec<&'static str>),

  #[error("field `{0}` must be a string")]
  InvalidField(&'static str),

  #[error("options must be a list of exactly 4 strings")]
  MalformedOptions,
}

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("GROQ_API_KEY is not set")]
  MissingApiKey,

  #[error("GROQ_API_KEY still holds the placeholder value")]
  PlaceholderApiKey,

  #[error("invalid value for {name}: {value}")]
  InvalidValue { name: &'static str, value: String },

  #[error("failed to build HTTP client: {0}")]
  Client(#[from] reqwest::Error),
}

/// Request-level failures, rendered as `{ "error": "..." }`.
#[derive(Error, Debug)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  Internal(&'static str),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> axum::response::Response {
    let status = match &self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorOut { error: self.to_string() })).into_response()
  }
}
