//! arXiv paper notes for a Markdown vault.
//!
//! `papernote` turns an arXiv link into a curated Markdown note, providing:
//!
//! - URL normalization for `abs` and `pdf` style arXiv links
//! - Metadata retrieval from the arXiv API and Semantic Scholar
//! - Frontmatter and section merging that never clobbers existing notes
//! - Sibling notes for influential citing and cited papers
//! - PDF download and page-by-page text extraction
//! - Generative summaries through the Gemini API
//!
//! # Getting Started
//!
//! ```no_run
//! use papernote::{prelude::*, related::RelatedPaperMode, settings::Settings, url::ArxivUrl,
//!                 vault::Vault, Papernote};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let settings = Settings::load(Settings::default_path())?;
//!   let papernote = Papernote::new(&settings, Vault::new("notes"));
//!
//!   let url = ArxivUrl::parse("http://arxiv.org/pdf/1706.03762.pdf")?;
//!   let (note, _) = papernote.ensure_note(None).await?;
//!   let metadata = papernote.fetch_metadata(&url).await?;
//!
//!   let report = papernote.insert_metadata(&note, &metadata).await?;
//!   papernote.insert_related_papers(&report.note, &metadata, RelatedPaperMode::Inline).await?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`url`]: arXiv URL normalization, validation and identifier extraction
//! - [`format`]: Filename sanitization and text cleanup
//! - [`client`]: arXiv and Semantic Scholar API clients
//! - [`document`]: Frontmatter-plus-body note model
//! - [`merge`]: Metadata merging into existing notes
//! - [`related`]: Influential paper sections and sibling notes
//! - [`vault`]: File operations on the note directory
//! - [`download`]: PDF retrieval
//! - [`pdf`]: PDF text extraction
//! - [`llm`]: Gemini request builder
//! - [`summary`]: Summarization prompts and summary blocks
//! - [`settings`]: Persisted user settings

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod client;
pub mod document;
pub mod download;
pub mod error;
pub mod format;
pub mod llm;
pub mod merge;
pub mod paper;
pub mod pdf;
pub mod related;
pub mod settings;
pub mod summary;
pub mod url;
pub mod vault;
mod workflow;

pub use workflow::{MetadataReport, Papernote};

use crate::{
  client::*,
  document::Document,
  download::PdfDownloader,
  error::*,
  paper::*,
  pdf::PdfExtractor,
  related::{RelatedPaperMode, RelatedPapers},
  settings::Settings,
  summary::{PromptChoice, Summarizer},
  url::ArxivUrl,
  vault::Vault,
};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use papernote::{prelude::*, url::ArxivUrl};
///
/// fn example() -> Result<(), PapernoteError> {
///   let url = ArxivUrl::parse("https://arxiv.org/abs/2404.16260")?;
///   assert_eq!(url.id()?, "2404.16260");
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    error::PapernoteError,
    related::RelatedPaperMode,
    summary::PromptChoice,
  };
}
