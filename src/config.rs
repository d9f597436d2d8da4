//! Process configuration: environment settings plus optional prompt overrides from TOML.
//!
//! Environment (optionally seeded from a local `.env` file):
//!   GROQ_API_KEY       : credential; missing or placeholder disables generation
//!   GROQ_BASE_URL      : default "https://api.groq.com/openai/v1"
//!   GROQ_MODEL         : default "llama-3.1-8b-instant"
//!   GROQ_TIMEOUT_SECS  : HTTP timeout for model calls, default 60
//!   PORT               : u16, default 5000
//!   QUIZ_MAX_QUESTIONS : upper bound for questionCount, default 50
//!   QUIZ_CONFIG_PATH   : TOML file with a `[prompts]` table

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_QUESTIONS: usize = 50;

/// Value shipped in the sample `.env`; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your_groq_api_key_here";

#[derive(Clone, Debug)]
pub struct Settings {
  pub api_key: Option<String>,
  pub base_url: String,
  pub model: String,
  pub timeout: Duration,
  pub port: u16,
  pub max_questions: usize,
  pub prompts: Prompts,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      api_key: None,
      base_url: DEFAULT_BASE_URL.into(),
      model: DEFAULT_MODEL.into(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      port: DEFAULT_PORT,
      max_questions: DEFAULT_MAX_QUESTIONS,
      prompts: Prompts::default(),
    }
  }
}

impl Settings {
  /// Read settings from the process environment after loading `.env` if present.
  pub fn from_env() -> Result<Self, ConfigError> {
    if let Ok(path) = dotenv::dotenv() {
      info!(target: "quizgen_backend", path = %path.display(), "Loaded .env file");
    }
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Build settings from an arbitrary variable lookup.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();
    let prompts = lookup("QUIZ_CONFIG_PATH")
      .and_then(|path| load_prompts_from_path(&path))
      .unwrap_or_default();

    Ok(Self {
      api_key: lookup("GROQ_API_KEY"),
      base_url: lookup("GROQ_BASE_URL")
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or(defaults.base_url),
      model: lookup("GROQ_MODEL").unwrap_or(defaults.model),
      timeout: parse_var(&lookup, "GROQ_TIMEOUT_SECS")?
        .map(Duration::from_secs)
        .unwrap_or(defaults.timeout),
      port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
      max_questions: parse_var(&lookup, "QUIZ_MAX_QUESTIONS")?.unwrap_or(defaults.max_questions),
      prompts,
    })
  }

  /// The credential, if it is present and not the placeholder.
  pub fn usable_api_key(&self) -> Result<&str, ConfigError> {
    match self.api_key.as_deref().map(str::trim) {
      None | Some("") => Err(ConfigError::MissingApiKey),
      Some(PLACEHOLDER_API_KEY) => Err(ConfigError::PlaceholderApiKey),
      Some(key) => Ok(key),
    }
  }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
  F: Fn(&str) -> Option<String>,
  T: std::str::FromStr,
{
  match lookup(name) {
    None => Ok(None),
    Some(raw) => raw
      .trim()
      .parse::<T>()
      .map(Some)
      .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
  }
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct PromptConfig {
  #[serde(default)]
  pub prompts: Prompts,
}

/// Prompt templates sent to the model. `{topic}` and `{difficulty}` are substituted.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub question_system: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      question_system: r#"You are an expert quiz creator. Generate a single multiple-choice question about {topic} with {difficulty} difficulty.

IMPORTANT: Return ONLY a valid JSON object with this exact structure:
{
  "question": "Your question here",
  "options": ["Option A", "Option B", "Option C", "Option D"],
  "correct_answer": "Option A",
  "explanation": "Brief explanation of the correct answer"
}

Requirements:
- Exactly 4 options
- One correct answer that matches exactly one of the options
- Clear, concise explanation
- Appropriate difficulty level
- Question should be factual and have one clearly correct answer"#
        .into(),
    }
  }
}

/// Load prompt overrides from a TOML file. On any IO/parse error, returns None.
pub fn load_prompts_from_path(path: &str) -> Option<Prompts> {
  match std::fs::read_to_string(path) {
    Ok(s) => match toml::from_str::<PromptConfig>(&s) {
      Ok(cfg) => {
        info!(target: "quizgen_backend", %path, "Loaded prompt config (TOML)");
        Some(cfg.prompts)
      }
      Err(e) => {
        error!(target: "quizgen_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "quizgen_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_env_is_empty() {
    let s = Settings::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(s.port, 5000);
    assert_eq!(s.model, "llama-3.1-8b-instant");
    assert_eq!(s.base_url, "https://api.groq.com/openai/v1");
    assert_eq!(s.max_questions, 50);
    assert!(matches!(s.usable_api_key(), Err(ConfigError::MissingApiKey)));
  }

  #[test]
  fn reads_overrides() {
    let s = Settings::from_lookup(lookup_from(&[
      ("GROQ_API_KEY", "gsk_test"),
      ("GROQ_BASE_URL", "http://127.0.0.1:9999/v1/"),
      ("PORT", "8080"),
      ("QUIZ_MAX_QUESTIONS", "7"),
      ("GROQ_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(s.usable_api_key().unwrap(), "gsk_test");
    assert_eq!(s.base_url, "http://127.0.0.1:9999/v1");
    assert_eq!(s.port, 8080);
    assert_eq!(s.max_questions, 7);
    assert_eq!(s.timeout, Duration::from_secs(5));
  }

  #[test]
  fn placeholder_and_blank_keys_are_unusable() {
    let s = Settings::from_lookup(lookup_from(&[("GROQ_API_KEY", PLACEHOLDER_API_KEY)])).unwrap();
    assert!(matches!(s.usable_api_key(), Err(ConfigError::PlaceholderApiKey)));
    let s = Settings::from_lookup(lookup_from(&[("GROQ_API_KEY", "   ")])).unwrap();
    assert!(matches!(s.usable_api_key(), Err(ConfigError::MissingApiKey)));
  }

  #[test]
  fn invalid_port_is_rejected() {
    let err = Settings::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
  }

  #[test]
  fn prompts_parse_from_toml() {
    let cfg: PromptConfig = toml::from_str("[prompts]\nquestion_system = \"Ask about {topic}\"\n").unwrap();
    assert_eq!(cfg.prompts.question_system, "Ask about {topic}");
    let empty: PromptConfig = toml::from_str("").unwrap();
    assert!(empty.prompts.question_system.contains("{difficulty}"));
  }

  #[test]
  fn unreadable_prompt_file_falls_back_to_defaults() {
    let s = Settings::from_lookup(lookup_from(&[("QUIZ_CONFIG_PATH", "/definitely/not/here.toml")])).unwrap();
    assert!(s.prompts.question_system.contains("{topic}"));
  }
}
