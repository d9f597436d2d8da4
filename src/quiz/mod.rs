//! Quiz assembly: generate `count` questions one after another, substituting
//! a static fallback for every slot the model fails to fill.

use tracing::{info, instrument, warn};

use crate::config::Prompts;
use crate::domain::{QuestionRecord, Quiz};
use crate::groq::CompletionBackend;
use crate::util::title_case;

pub mod generator;
pub mod matcher;
pub mod validate;

use generator::generate_question;

/// Static stand-in used when generation fails for slot `id`.
pub fn fallback_question(topic: &str, id: usize) -> QuestionRecord {
  QuestionRecord {
    id,
    question: format!(
      "This is a sample question about {}. What is the most important concept to understand?",
      topic
    ),
    options: [
      "Understanding the fundamentals".into(),
      "Memorizing all details".into(),
      "Skipping difficult parts".into(),
      "Only studying examples".into(),
    ],
    correct_answer: 0,
    explanation: "Understanding fundamentals is always the key to learning any subject effectively.".into(),
  }
}

pub fn quiz_title(topic: &str) -> String {
  format!("{} Quiz", title_case(topic))
}

/// Always returns exactly `count` questions with ids `1..=count`.
#[instrument(level = "info", skip(backend, prompts))]
pub async fn assemble_quiz(
  backend: &dyn CompletionBackend,
  prompts: &Prompts,
  topic: &str,
  difficulty: &str,
  count: usize,
) -> Quiz {
  let mut questions = Vec::with_capacity(count);
  let mut fallbacks = 0usize;

  for id in 1..=count {
    match generate_question(backend, prompts, topic, difficulty).await {
      Ok(q) => {
        info!(target: "quiz", id, total = count, "Question generated");
        questions.push(q.into_record(id));
      }
      Err(e) => {
        warn!(target: "quiz", id, total = count, error = %e, "Question generation failed; using fallback");
        fallbacks += 1;
        questions.push(fallback_question(topic, id));
      }
    }
  }

  info!(target: "quiz", %topic, %difficulty, generated = count - fallbacks, fallbacks, "Quiz assembled");
  Quiz {
    title: quiz_title(topic),
    difficulty: difficulty.to_string(),
    questions,
  }
}
