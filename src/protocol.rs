//! Public request/response bodies for the HTTP endpoints (serde ready).
//! Field names follow the frontend's camelCase contract.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_DIFFICULTY: &str = "medium";
pub const DEFAULT_QUESTION_COUNT: i64 = 5;

#[derive(Debug, Serialize)]
pub struct HealthOut {
    pub status: &'static str,
    pub groq_connected: bool,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuizIn {
    /// Missing reads as empty; anything other than a string (including `null`) is unusable.
    #[serde(default, deserialize_with = "present")]
    pub topic: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Integer, float (truncated) or numeric string; see `question_count`.
    #[serde(default, rename = "questionCount", deserialize_with = "present")]
    pub question_count: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it differs from a missing field.
fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

impl GenerateQuizIn {
    /// `None` when the topic is present but not a string.
    pub fn topic(&self) -> Option<&str> {
        match &self.topic {
            None => Some(""),
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => None,
        }
    }

    pub fn difficulty(&self) -> &str {
        self.difficulty.as_deref().unwrap_or(DEFAULT_DIFFICULTY)
    }

    /// Requested count, defaulting to 5 when absent. Floats truncate toward zero.
    /// `None` when the value cannot be read as an integer.
    pub fn question_count(&self) -> Option<i64> {
        match &self.question_count {
            None => Some(DEFAULT_QUESTION_COUNT),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Some(Value::String(s)) => s.trim().parse().ok(),
            Some(_) => None,
        }
    }
}

/// Values are compared as raw JSON; a missing field counts as `null`.
#[derive(Debug, Deserialize)]
pub struct ValidateAnswerIn {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default, rename = "userAnswer")]
    pub user_answer: Option<Value>,
    #[serde(default, rename = "correctAnswer")]
    pub correct_answer: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ValidateAnswerOut {
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
    pub message: &'static str,
}
