//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Title-case each run of cased letters: "ancient rome" -> "Ancient Rome", "WW2 history" -> "Ww2 History".
pub fn title_case(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut prev_cased = false;
  for ch in s.chars() {
    if ch.is_lowercase() || ch.is_uppercase() {
      if prev_cased {
        out.extend(ch.to_lowercase());
      } else {
        out.extend(ch.to_uppercase());
      }
      prev_cased = true;
    } else {
      out.push(ch);
      prev_cased = false;
    }
  }
  out
}

/// Log-safe truncation for model output previews.
pub fn trunc_for_log(s: &str, max_chars: usize) -> String {
  let count = s.chars().count();
  if count <= max_chars {
    s.to_string()
  } else {
    let head: String = s.chars().take(max_chars).collect();
    format!("{}… ({} chars total)", head, count)
  }
}

/// Mask a secret for display: first 8 and last 4 characters, or `***` for short values.
pub fn mask_secret(secret: &str) -> String {
  let chars: Vec<char> = secret.chars().collect();
  if chars.len() > 12 {
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
  } else {
    "***".into()
  }
}
