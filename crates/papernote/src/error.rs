//! Error types for the papernote library.
//!
//! Four failure families matter to users of this crate:
//! - [`PapernoteError::InvalidUrl`] for clipboard content that is not an arXiv link
//! - [`PapernoteError::RemoteFetch`] for non-200 or malformed API responses
//! - [`PapernoteError::Extraction`] for PDFs that cannot be decoded
//! - [`PapernoteError::Config`] for missing settings such as the API key
//!
//! Everything else wraps the underlying I/O, network or serialization error.
//!
//! # Examples
//!
//! ```
//! use papernote::{error::PapernoteError, url::ArxivUrl};
//!
//! match ArxivUrl::parse("ftp://arxiv.org/abs/1") {
//!   Err(PapernoteError::InvalidUrl(url)) => println!("not an arXiv link: {url}"),
//!   Err(e) => println!("other error: {e}"),
//!   Ok(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

use super::*;

/// Error type alias used for the [`papernote`](crate) crate.
pub type Result<T> = core::result::Result<T, PapernoteError>;

/// Errors that can occur when working with papers and notes.
#[derive(Error, Debug)]
pub enum PapernoteError {
  /// The input is not an arXiv URL, or it carries no `digits.digits` identifier.
  ///
  /// The string parameter holds the offending input after normalization.
  #[error("Not a valid arXiv URL: {0}")]
  InvalidUrl(String),

  /// An external API answered with a non-200 status or an unusable body.
  ///
  /// This covers the arXiv API, the PDF host and the Gemini endpoint. The
  /// Semantic Scholar lookup never surfaces this error; it degrades instead.
  #[error("Remote fetch failed: {0}")]
  RemoteFetch(String),

  /// The PDF could not be decoded into text.
  ///
  /// Wraps corrupt streams, missing page trees and unsupported encodings
  /// reported by `lopdf`.
  #[error("PDF text extraction failed: {0}")]
  Extraction(String),

  /// A required setting is missing, or a setting could not be applied.
  #[error("Configuration error: {0}")]
  Config(String),

  /// A note already exists where a new one was to be created.
  ///
  /// Notes are never overwritten by creation or rename.
  #[error("A note already exists at {}", .0.display())]
  DuplicateFile(PathBuf),

  /// The frontmatter block parsed as YAML but is not a key-value mapping.
  #[error("Frontmatter is not a key-value mapping")]
  InvalidFrontmatter,

  /// A network request failed before any response was received.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// Frontmatter YAML could not be parsed or written.
  #[error(transparent)]
  Yaml(#[from] serde_yaml::Error),

  /// A JSON payload could not be parsed or written.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The settings file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The settings could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),
}

impl From<lopdf::Error> for PapernoteError {
  fn from(error: lopdf::Error) -> Self { Self::Extraction(error.to_string()) }
}
