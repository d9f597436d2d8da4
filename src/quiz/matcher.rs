//! Resolve which option the model meant by its `correct_answer` text.

/// Index of the option matching `declared`.
///
/// Exact equality wins; otherwise the first option where either lowercased
/// string contains the other; otherwise 0. Best effort only: the model tends
/// to echo answers with different casing or trailing punctuation.
pub fn resolve_correct_index<S: AsRef<str>>(declared: &str, options: &[S]) -> usize {
  if let Some(i) = options.iter().position(|o| o.as_ref() == declared) {
    return i;
  }

  let declared = declared.to_lowercase();
  options
    .iter()
    .position(|o| {
      let option = o.as_ref().to_lowercase();
      option.contains(&declared) || declared.contains(&option)
    })
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::resolve_correct_index;

  const OPTS: [&str; 4] = ["Paris", "London", "Berlin", "Madrid"];

  #[test]
  fn exact_match() {
    assert_eq!(resolve_correct_index("Berlin", &OPTS), 2);
  }

  #[test]
  fn case_insensitive_match() {
    assert_eq!(resolve_correct_index("madrid", &OPTS), 3);
  }

  #[test]
  fn declared_contains_option() {
    assert_eq!(resolve_correct_index("London.", &OPTS), 1);
    assert_eq!(resolve_correct_index("B) Berlin", &OPTS), 2);
  }

  #[test]
  fn option_contains_declared() {
    let opts = ["The Treaty of Versailles", "The Treaty of Paris", "Yalta", "Potsdam"];
    assert_eq!(resolve_correct_index("yalta", &opts), 2);
  }

  #[test]
  fn exact_beats_earlier_substring() {
    // "Rome" is a substring of option 0, but option 2 is exact.
    let opts = ["Rome, Italy", "Athens", "Rome", "Carthage"];
    assert_eq!(resolve_correct_index("Rome", &opts), 2);
  }

  #[test]
  fn first_substring_match_wins() {
    let opts = ["Julius Caesar", "Augustus", "Caesar Augustus", "Nero"];
    assert_eq!(resolve_correct_index("caesar", &opts), 0);
  }

  #[test]
  fn no_match_defaults_to_zero() {
    assert_eq!(resolve_correct_index("Lisbon", &OPTS), 0);
  }
}
