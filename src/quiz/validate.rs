//! Structural checks on the model's JSON before it becomes a question.

use serde_json::{Map, Value};

use crate::domain::OPTION_COUNT;
use crate::error::GenerationError;

pub const REQUIRED_FIELDS: [&str; 4] = ["question", "options", "correct_answer", "explanation"];

/// A model answer that passed validation. `correct_answer` is still the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedQuestion {
  pub question: String,
  pub options: [String; OPTION_COUNT],
  pub correct_answer: String,
  pub explanation: String,
}

/// Parse model output text and validate it.
pub fn parse_question(raw: &str) -> Result<CheckedQuestion, GenerationError> {
  let value: Value = serde_json::from_str(raw)?;
  validate_question(&value)
}

/// Field presence first, then options cardinality, then field types.
pub fn validate_question(value: &Value) -> Result<CheckedQuestion, GenerationError> {
  let empty = Map::new();
  let obj = value.as_object().unwrap_or(&empty);

  let missing: Vec<&'static str> = REQUIRED_FIELDS
    .iter()
    .copied()
    .filter(|k| !obj.contains_key(*k))
    .collect();
  if !missing.is_empty() {
    return Err(GenerationError::MissingField(missing));
  }

  let options = obj["options"]
    .as_array()
    .filter(|opts| opts.len() == OPTION_COUNT)
    .and_then(|opts| {
      let texts: Option<Vec<String>> = opts.iter().map(|o| o.as_str().map(str::to_string)).collect();
      texts.and_then(|t| <[String; OPTION_COUNT]>::try_from(t).ok())
    })
    .ok_or(GenerationError::MalformedOptions)?;

  Ok(CheckedQuestion {
    question: text_field(obj, "question")?,
    options,
    correct_answer: text_field(obj, "correct_answer")?,
    explanation: text_field(obj, "explanation")?,
  })
}

fn text_field(obj: &Map<String, Value>, key: &'static str) -> Result<String, GenerationError> {
  obj[key]
    .as_str()
    .map(str::to_string)
    .ok_or(GenerationError::InvalidField(key))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn good() -> Value {
    json!({
      "question": "Who was the first emperor of Rome?",
      "options": ["Augustus", "Nero", "Caligula", "Trajan"],
      "correct_answer": "Augustus",
      "explanation": "Octavian took the name Augustus in 27 BC."
    })
  }

  #[test]
  fn accepts_well_formed_question() {
    let q = validate_question(&good()).unwrap();
    assert_eq!(q.options[3], "Trajan");
    assert_eq!(q.correct_answer, "Augustus");
  }

  #[test]
  fn reports_every_missing_field() {
    let mut v = good();
    let obj = v.as_object_mut().unwrap();
    obj.remove("explanation");
    obj.remove("question");
    match validate_question(&v) {
      Err(GenerationError::MissingField(fields)) => assert_eq!(fields, vec!["question", "explanation"]),
      other => panic!("unexpected: {other:?}"),
    }
  }

  #[test]
  fn non_object_is_missing_everything() {
    match validate_question(&json!(["a", "b"])) {
      Err(GenerationError::MissingField(fields)) => assert_eq!(fields.len(), 4),
      other => panic!("unexpected: {other:?}"),
    }
  }

  #[test]
  fn missing_field_checked_before_options() {
    let v = json!({ "question": "q", "options": ["only one"], "correct_answer": "a" });
    assert!(matches!(validate_question(&v), Err(GenerationError::MissingField(_))));
  }

  #[test]
  fn rejects_wrong_option_count() {
    let mut v = good();
    v["options"] = json!(["a", "b", "c"]);
    assert!(matches!(validate_question(&v), Err(GenerationError::MalformedOptions)));
    v["options"] = json!(["a", "b", "c", "d", "e"]);
    assert!(matches!(validate_question(&v), Err(GenerationError::MalformedOptions)));
  }

  #[test]
  fn rejects_non_list_or_non_text_options() {
    let mut v = good();
    v["options"] = json!("a, b, c, d");
    assert!(matches!(validate_question(&v), Err(GenerationError::MalformedOptions)));
    v["options"] = json!(["a", "b", 3, "d"]);
    assert!(matches!(validate_question(&v), Err(GenerationError::MalformedOptions)));
  }

  #[test]
  fn duplicate_options_are_allowed() {
    let mut v = good();
    v["options"] = json!(["same", "same", "same", "same"]);
    assert!(validate_question(&v).is_ok());
  }

  #[test]
  fn non_text_answer_is_invalid() {
    let mut v = good();
    v["correct_answer"] = json!(0);
    assert!(matches!(validate_question(&v), Err(GenerationError::InvalidField("correct_answer"))));
  }

  #[test]
  fn unparseable_text_is_a_parse_error() {
    assert!(matches!(parse_question("not json {"), Err(GenerationError::Parse(_))));
  }
}
