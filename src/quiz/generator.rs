//! One model call → one validated question.

use tracing::{debug, instrument};

use crate::config::Prompts;
use crate::domain::GeneratedQuestion;
use crate::error::GenerationError;
use crate::groq::{CompletionBackend, CompletionParams};
use crate::quiz::matcher::resolve_correct_index;
use crate::quiz::validate::parse_question;
use crate::util::{fill_template, trunc_for_log};

pub const QUESTION_PARAMS: CompletionParams = CompletionParams { temperature: 0.7, max_tokens: 500 };

pub fn question_prompt(prompts: &Prompts, topic: &str, difficulty: &str) -> String {
  fill_template(&prompts.question_system, &[("topic", topic), ("difficulty", difficulty)])
}

/// Ask the model for a single question and normalize it.
///
/// Transport, HTTP, parse and validation failures all come back as `Err`;
/// a partially valid answer is never returned.
#[instrument(level = "info", skip(backend, prompts), fields(model = %backend.model()))]
pub async fn generate_question(
  backend: &dyn CompletionBackend,
  prompts: &Prompts,
  topic: &str,
  difficulty: &str,
) -> Result<GeneratedQuestion, GenerationError> {
  let system = question_prompt(prompts, topic, difficulty);
  let raw = backend.complete_json(&system, QUESTION_PARAMS).await?;
  debug!(target: "quiz", preview = %trunc_for_log(&raw, 120), "Model output received");

  let checked = parse_question(&raw)?;
  let correct_index = resolve_correct_index(&checked.correct_answer, &checked.options);

  Ok(GeneratedQuestion {
    question: checked.question,
    options: checked.options,
    correct_index,
    explanation: checked.explanation,
  })
}
