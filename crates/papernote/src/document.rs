//! Markdown notes as a frontmatter mapping plus a body.
//!
//! A note may open with a YAML frontmatter block delimited by `---` lines.
//! [`Document`] keeps that block as an order-preserving [`Mapping`] so keys
//! written by the user keep their position across merges, and keeps the rest
//! of the file as an opaque body of `## Heading` sections.
//!
//! # Examples
//!
//! ```
//! use papernote::document::Document;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::parse("---\ntitle: Old\nrating: 4\n---\n## Notes\nGreat.\n")?;
//! assert_eq!(doc.frontmatter().unwrap().len(), 2);
//! assert!(doc.has_section("## Notes"));
//! # Ok(())
//! # }
//! ```

use super::*;

/// Line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// A parsed note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
  /// Frontmatter mapping, `None` when the note has no block
  frontmatter: Option<Mapping>,
  /// Everything after the closing delimiter line
  body:        String,
}

impl Document {
  /// Splits `text` into frontmatter and body.
  ///
  /// A block is recognised only when the very first line is `---` and a later
  /// line is `---`; otherwise the whole text is body. An empty block parses to
  /// an empty mapping.
  ///
  /// # Errors
  ///
  /// Fails when the block is not valid YAML or not a mapping, so callers never
  /// rewrite a note whose frontmatter they could not read.
  pub fn parse(text: &str) -> Result<Self> {
    let Some(rest) = text.strip_prefix("---\n").or_else(|| text.strip_prefix("---\r\n")) else {
      return Ok(Self { frontmatter: None, body: text.to_string() });
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
      if line.trim_end_matches(['\r', '\n']) == DELIMITER {
        let frontmatter = parse_mapping(&rest[..offset])?;
        let body = rest[offset + line.len()..].to_string();
        return Ok(Self { frontmatter: Some(frontmatter), body });
      }
      offset += line.len();
    }

    trace!("Unterminated frontmatter block, treating the note as plain body");
    Ok(Self { frontmatter: None, body: text.to_string() })
  }

  /// The frontmatter mapping, if the note has a block.
  pub fn frontmatter(&self) -> Option<&Mapping> { self.frontmatter.as_ref() }

  /// A copy of the frontmatter, or an empty mapping.
  pub fn frontmatter_or_empty(&self) -> Mapping { self.frontmatter.clone().unwrap_or_default() }

  /// Replaces the frontmatter block.
  pub fn set_frontmatter(&mut self, frontmatter: Mapping) { self.frontmatter = Some(frontmatter); }

  /// The note body.
  pub fn body(&self) -> &str { &self.body }

  /// Replaces the note body.
  pub fn set_body(&mut self, body: impl Into<String>) { self.body = body.into(); }

  /// Whether `heading` occurs anywhere in the body.
  ///
  /// This is an exact, case-sensitive substring test: an empty section counts
  /// as present.
  pub fn has_section(&self, heading: &str) -> bool { self.body.contains(heading) }

  /// Serializes the note back to text.
  pub fn render(&self) -> Result<String> {
    match &self.frontmatter {
      None => Ok(self.body.clone()),
      Some(frontmatter) => {
        let yaml =
          if frontmatter.is_empty() { String::new() } else { serde_yaml::to_string(frontmatter)? };
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n{}", self.body))
      },
    }
  }
}

/// Parses a frontmatter block into a mapping.
fn parse_mapping(yaml: &str) -> Result<Mapping> {
  match serde_yaml::from_str::<Value>(yaml)? {
    Value::Null => Ok(Mapping::new()),
    Value::Mapping(mapping) => Ok(mapping),
    _ => Err(PapernoteError::InvalidFrontmatter),
  }
}
