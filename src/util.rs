//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Whitespace-separated word count. Used by the length bonus in scoring
/// and by the strengths/weaknesses feedback.
pub fn word_count(s: &str) -> usize {
  s.split_whitespace().count()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_template_replaces_all_occurrences() {
    let out = fill_template("{a} vs {b}, again {a}", &[("a", "REST"), ("b", "GraphQL")]);
    assert_eq!(out, "REST vs GraphQL, again REST");
  }

  #[test]
  fn word_count_ignores_extra_whitespace() {
    assert_eq!(word_count("  one   two\tthree \n"), 3);
    assert_eq!(word_count(""), 0);
  }
}
