//! Domain models: generated questions and the assembled quiz.

use serde::Serialize;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// A validated, normalized question before it gets its position in a quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedQuestion {
  pub question: String,
  pub options: [String; OPTION_COUNT],
  pub correct_index: usize,
  pub explanation: String,
}

impl GeneratedQuestion {
  pub fn into_record(self, id: usize) -> QuestionRecord {
    QuestionRecord {
      id,
      question: self.question,
      options: self.options,
      correct_answer: self.correct_index,
      explanation: self.explanation,
    }
  }
}

/// One question as served to the client. `id` is the 1-based position.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct QuestionRecord {
  pub id: usize,
  pub question: String,
  pub options: [String; OPTION_COUNT],
  #[serde(rename = "correctAnswer")]
  pub correct_answer: usize,
  pub explanation: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Quiz {
  pub title: String,
  pub difficulty: String,
  pub questions: Vec<QuestionRecord>,
}
