//! Text helpers shared by note naming and metadata cleanup.

use super::*;

lazy_static! {
  static ref FORBIDDEN: Regex = Regex::new(r#"[?:/\\<>*|"]"#).unwrap();
  static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Converts a title into a note filename stem.
///
/// Each of `? : / \ < > * | "` becomes `_`, whitespace runs collapse to one
/// space and the ends are trimmed. No uniqueness is enforced here; see
/// [`Vault::create_note`](crate::vault::Vault::create_note) for collisions.
///
/// ```
/// use papernote::format::sanitize_filename;
///
/// assert_eq!(sanitize_filename("A: B/C"), "A_ B_C");
/// ```
pub fn sanitize_filename(name: &str) -> String {
  let replaced = FORBIDDEN.replace_all(name, "_");
  WHITESPACE.replace_all(&replaced, " ").trim().to_string()
}

/// The `.md` filename for a title, or `None` when nothing is left after sanitizing.
pub fn note_filename(title: &str) -> Option<String> {
  let stem = sanitize_filename(title);
  (!stem.is_empty()).then(|| format!("{stem}.md"))
}

/// Collapses the hard-wrapped whitespace of API text into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
  WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sanitize_each_forbidden_character() {
    assert_eq!(sanitize_filename("A: B/C"), "A_ B_C");
    assert_eq!(sanitize_filename(r#"a?b:c/d\e<f>g*h|i"j"#), "a_b_c_d_e_f_g_h_i_j");
  }

  #[test]
  fn test_sanitize_whitespace() {
    assert_eq!(sanitize_filename("  Attention   Is\tAll\nYou Need  "), "Attention Is All You Need");
    assert_eq!(sanitize_filename("   "), "");
  }

  #[test]
  fn test_sanitize_keeps_other_punctuation() {
    assert_eq!(sanitize_filename("BERT (2019) - Pre-training, v2."), "BERT (2019) - Pre-training, v2.");
  }

  #[test]
  fn test_note_filename() {
    assert_eq!(note_filename("Deep Learning: A Survey").as_deref(), Some("Deep Learning_ A Survey.md"));
    assert_eq!(note_filename(" \n "), None);
  }

  #[test]
  fn test_collapse_whitespace() {
    assert_eq!(
      collapse_whitespace("\n  The dominant sequence\n  transduction models\n\n are based "),
      "The dominant sequence transduction models are based"
    );
  }
}
