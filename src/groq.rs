//! Minimal Groq client (OpenAI-compatible chat completions).
//!
//! We only send a single system message and request a strict JSON object back.
//! Calls are instrumented and log model names, latencies, and token usage (not contents).
//!
//! NOTE: We never log the API key.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::Settings;
use crate::error::{ConfigError, GenerationError};

/// Sampling parameters for one completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionParams {
  pub temperature: f32,
  pub max_tokens: u32,
}

/// Anything that can turn a system prompt into a JSON text completion.
///
/// `AppState` holds one of these so handlers never reach for a concrete client.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
  /// Model identifier reported by `/health`.
  fn model(&self) -> &str;

  /// Returns the raw message content of the first choice.
  async fn complete_json(&self, system: &str, params: CompletionParams) -> Result<String, GenerationError>;
}

#[derive(Clone)]
pub struct Groq {
  client: reqwest::Client,
  api_key: String,
  pub base_url: String,
  pub model: String,
}

impl Groq {
  pub fn new(api_key: String, base_url: String, model: String, timeout: std::time::Duration) -> Result<Self, ConfigError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self { client, api_key, base_url, model })
  }

  /// Construct the client from settings; fails on a missing or placeholder key.
  pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
    let key = settings.usable_api_key()?;
    Self::new(key.to_string(), settings.base_url.clone(), settings.model.clone(), settings.timeout)
  }
}

#[async_trait]
impl CompletionBackend for Groq {
  fn model(&self) -> &str {
    &self.model
  }

  #[instrument(level = "info", skip(self, system), fields(model = %self.model, max_tokens = params.max_tokens))]
  async fn complete_json(&self, system: &str, params: CompletionParams) -> Result<String, GenerationError> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![ChatMessageReq { role: "system".into(), content: system.into() }],
      temperature: params.temperature,
      max_tokens: params.max_tokens,
      response_format: ResponseFormat { r#type: "json_object".into() },
    };

    let start = std::time::Instant::now();
    let res = self.client.post(&url)
      .header(USER_AGENT, "quizgen-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await?;

    if !res.status().is_success() {
      let status = res.status().as_u16();
      let body = res.text().await.unwrap_or_default();
      let message = extract_api_error(&body).unwrap_or(body);
      return Err(GenerationError::Upstream { status, message });
    }

    let body: ChatCompletionResponse = res.json().await?;
    let elapsed = start.elapsed();
    if let Some(usage) = &body.usage {
      info!(?elapsed, prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "Groq usage");
    }

    body.choices.into_iter().next()
      .and_then(|c| c.message.content)
      .filter(|text| !text.trim().is_empty())
      .ok_or(GenerationError::EmptyCompletion)
  }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  max_tokens: u32,
  response_format: ResponseFormat,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: String }
#[derive(Serialize)]
struct ResponseFormat { #[serde(rename = "type")] r#type: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

/// Try to extract a clean error message from an OpenAI-style error body.
fn extract_api_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  serde_json::from_str::<EWrap>(body).ok().map(|w| w.error.message)
}
