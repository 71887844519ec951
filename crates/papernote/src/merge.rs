//! Merging fetched metadata into an existing note.
//!
//! A merge never discards what the user wrote:
//!
//! - frontmatter keys are only added or overwritten, unknown keys survive in place
//! - review state (`checked`, `interest`, `rating`, `tags`) is initialized once and then left
//!   alone on every re-fetch
//! - the `## Abstract` section is created at most once
//!
//! The result is normalized so the frontmatter block abuts the body.
//!
//! # Examples
//!
//! ```
//! use papernote::{merge::merge_metadata, paper::PaperMetadata};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let metadata = PaperMetadata {
//!   title: "Attention Is All You Need".into(),
//!   abstract_text: "Transformers.".into(),
//!   ..Default::default()
//! };
//! let merged = merge_metadata("---\nrating: 5\n---\nMy notes\n", &metadata)?;
//! assert!(merged.contains("rating: 5"));
//! assert!(merged.ends_with("My notes\n\n## Abstract\nTransformers."));
//! # Ok(())
//! # }
//! ```

use super::*;

/// Heading of the abstract section.
pub const ABSTRACT_HEADING: &str = "## Abstract";

/// Review-state keys and the value each starts with.
fn review_defaults() -> [(&'static str, Value); 4] {
  [
    ("checked", Value::Bool(false)),
    ("interest", Value::Null),
    ("rating", Value::Null),
    ("tags", Value::Null),
  ]
}

/// Builds the updated frontmatter from `existing` and fresh `metadata`.
///
/// `title`, `paper_link`, `publish_date` and `authors` take the new value when
/// it is non-empty and keep the old one otherwise. Citation counts are always
/// written.
pub fn merged_frontmatter(existing: &Mapping, metadata: &PaperMetadata) -> Mapping {
  let mut frontmatter = existing.clone();

  for (key, value) in [
    ("title", &metadata.title),
    ("paper_link", &metadata.paper_link),
    ("publish_date", &metadata.publish_date),
    ("authors", &metadata.authors),
  ] {
    if !value.is_empty() {
      frontmatter.insert(key.into(), Value::String(value.clone()));
    }
  }

  frontmatter.insert("num_cited_by".into(), Value::Number(metadata.num_cited_by.into()));
  frontmatter.insert("num_citing".into(), Value::Number(metadata.num_citing.into()));

  for (key, default) in review_defaults() {
    if !frontmatter.contains_key(key) {
      frontmatter.insert(key.into(), default);
    }
  }

  frontmatter
}

/// Applies [`merged_frontmatter`] to a document, creating the block if needed.
pub fn merge_frontmatter(doc: &mut Document, metadata: &PaperMetadata) {
  let frontmatter = merged_frontmatter(&doc.frontmatter_or_empty(), metadata);
  doc.set_frontmatter(frontmatter);
}

/// Appends an abstract section unless the body already has one.
///
/// The section is separated from existing content by one blank line; in an
/// otherwise empty body it becomes the entire body.
pub fn insert_abstract(doc: &mut Document, abstract_text: &str) {
  if doc.has_section(ABSTRACT_HEADING) {
    trace!("Abstract section already present");
    return;
  }

  let block = format!("{ABSTRACT_HEADING}\n{abstract_text}\n");
  let body = doc.body().trim();
  let body =
    if body.is_empty() { block.trim().to_string() } else { format!("{body}\n\n{block}") };
  doc.set_body(body);
}

/// Trims surrounding newlines off the body so it abuts the frontmatter.
///
/// Only the body's edges change; blank lines inside it are left alone.
pub fn tidy(doc: &mut Document) {
  let body = doc.body().trim_matches('\n').to_string();
  doc.set_body(body);
}

/// Runs the full merge over a note's text.
///
/// # Errors
///
/// Fails only when the existing frontmatter cannot be read; the note is then
/// left for the caller to report rather than rewritten.
pub fn merge_metadata(text: &str, metadata: &PaperMetadata) -> Result<String> {
  let mut doc = Document::parse(text)?;
  merge_frontmatter(&mut doc, metadata);
  insert_abstract(&mut doc, &metadata.abstract_text);
  tidy(&mut doc);
  doc.render()
}
