//! arXiv URL normalization, validation and identifier extraction.
//!
//! Clipboard contents arrive in many shapes: `http` links, `pdf` links with a
//! `.pdf` suffix, or the canonical abstract page. [`normalize`] folds all of
//! them into `https://arxiv.org/abs/<id>`, [`is_valid`] checks the result, and
//! [`extract_id`] pulls out the new-style `digits.digits` identifier.
//!
//! # Examples
//!
//! ```
//! use papernote::url::{extract_id, is_valid, normalize};
//!
//! let url = normalize("http://arxiv.org/pdf/1706.03762.pdf");
//! assert_eq!(url, "https://arxiv.org/abs/1706.03762");
//! assert!(is_valid(&url));
//! assert_eq!(extract_id(&url).as_deref(), Some("1706.03762"));
//! ```

use super::*;

/// Host and path prefix of the PDF endpoint.
pub const DEFAULT_PDF_URL: &str = "https://arxiv.org/pdf";

lazy_static! {
  static ref ABSTRACT_URL: Regex = Regex::new(r"(?i)^https://arxiv\.org/abs/.+").unwrap();
  static ref ARXIV_ID: Regex = Regex::new(r"arxiv\.org/abs/(\d+\.\d+)").unwrap();
}

/// Canonicalizes an arXiv link.
///
/// Applied in order: surrounding whitespace is trimmed, an `http:` scheme is
/// upgraded to `https:`, the first `arxiv.org/pdf` becomes `arxiv.org/abs`, and
/// a trailing `.pdf` is removed. Applying it twice yields the same string.
pub fn normalize(raw: &str) -> String {
  let trimmed = raw.trim();
  let upgraded = match trimmed.strip_prefix("http:") {
    Some(rest) => format!("https:{rest}"),
    None => trimmed.to_string(),
  };
  let rewritten = upgraded.replacen("arxiv.org/pdf", "arxiv.org/abs", 1);
  match rewritten.strip_suffix(".pdf") {
    Some(stripped) => stripped.to_string(),
    None => rewritten,
  }
}

/// Whether `url` starts with `https://arxiv.org/abs/` followed by at least one character.
pub fn is_valid(url: &str) -> bool { ABSTRACT_URL.is_match(url) }

/// Fails with [`PapernoteError::InvalidUrl`] when [`is_valid`] does not hold.
pub fn validate(url: &str) -> Result<()> {
  if is_valid(url) {
    Ok(())
  } else {
    Err(PapernoteError::InvalidUrl(url.to_string()))
  }
}

/// Captures the `digits.digits` identifier following `arxiv.org/abs/`.
///
/// Old-style identifiers such as `math.AG/0601001` yield `None`.
pub fn extract_id(url: &str) -> Option<String> {
  ARXIV_ID.captures(url).and_then(|cap| cap.get(1)).map(|m| m.as_str().to_string())
}

/// Builds the PDF download URL for an identifier under `base`.
pub fn pdf_url(base: &str, id: &str) -> String {
  format!("{}/{id}.pdf", base.trim_end_matches('/'))
}

/// A normalized and validated arXiv abstract URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArxivUrl {
  /// Normalized URL text
  url: String,
}

impl ArxivUrl {
  /// Normalizes `raw` and validates the result.
  pub fn parse(raw: &str) -> Result<Self> {
    let url = normalize(raw);
    validate(&url)?;
    trace!("Normalized {raw:?} to {url}");
    Ok(Self { url })
  }

  /// The normalized URL.
  pub fn as_str(&self) -> &str { &self.url }

  /// The paper identifier, required by every remote operation.
  pub fn id(&self) -> Result<String> {
    extract_id(&self.url).ok_or_else(|| PapernoteError::InvalidUrl(self.url.clone()))
  }
}

impl FromStr for ArxivUrl {
  type Err = PapernoteError;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl Display for ArxivUrl {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.url) }
}
