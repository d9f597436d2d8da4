//! HTTP endpoint handlers. These are thin wrappers that forward to the quiz logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{rejection::JsonRejection, State}, Json, response::IntoResponse};
use tracing::{error, info, instrument};

use crate::error::ApiError;
use crate::protocol::*;
use crate::quiz::assemble_quiz;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut { status: "healthy", groq_connected: state.is_connected(), model: state.model.clone() })
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_generate_quiz(
  State(state): State<Arc<AppState>>,
  body: Result<Json<GenerateQuizIn>, JsonRejection>,
) -> Result<Json<crate::domain::Quiz>, ApiError> {
  let Json(body) = body.map_err(|e| {
    error!(target: "quiz", error = %e, "Rejected generate-quiz body");
    ApiError::Internal("Failed to generate quiz")
  })?;

  let topic = body.topic().ok_or_else(|| {
    error!(target: "quiz", raw = ?body.topic, "topic is not a string");
    ApiError::Internal("Failed to generate quiz")
  })?;
  if topic.trim().is_empty() {
    return Err(ApiError::BadRequest("Topic is required".into()));
  }

  let Some(backend) = state.backend.as_deref() else {
    error!(target: "quiz", "generate-quiz called without a Groq client");
    return Err(ApiError::Internal("Groq client not initialized"));
  };

  let requested = body.question_count().ok_or_else(|| {
    error!(target: "quiz", raw = ?body.question_count, "questionCount is not an integer");
    ApiError::Internal("Failed to generate quiz")
  })?;
  if requested < 1 {
    return Err(ApiError::BadRequest("questionCount must be a positive integer".into()));
  }
  let count = usize::try_from(requested).unwrap_or(usize::MAX);
  if count > state.max_questions {
    return Err(ApiError::BadRequest(format!("questionCount must be at most {}", state.max_questions)));
  }

  let difficulty = body.difficulty();
  info!(target: "quiz", %topic, %difficulty, count, "Generating quiz");
  let quiz = assemble_quiz(backend, &state.prompts, topic, difficulty, count).await;
  Ok(Json(quiz))
}

#[instrument(level = "info", skip(body))]
pub async fn http_validate_answer(
  body: Result<Json<ValidateAnswerIn>, JsonRejection>,
) -> Result<Json<ValidateAnswerOut>, ApiError> {
  let Json(body) = body.map_err(|e| {
    error!(target: "quiz", error = %e, "Rejected validate-answer body");
    ApiError::Internal("Failed to validate answer")
  })?;

  let is_correct = body.user_answer == body.correct_answer;
  info!(target: "quiz", is_correct, has_question = body.question.is_some(), "Answer validated");
  let message = if is_correct { "Correct!" } else { "Incorrect. Try again!" };
  Ok(Json(ValidateAnswerOut { is_correct, message }))
}
