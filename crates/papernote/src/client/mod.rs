//! Remote metadata sources.
//!
//! [`MetadataFetcher`] combines the two APIs a paper note is built from:
//!
//! - [`ArxivClient`]: title, authors, date and abstract from the arXiv Atom API
//! - [`SemanticScholarClient`]: citation counts and influential neighbours
//!
//! The arXiv lookup is authoritative and its failures propagate. The citation
//! lookup is best-effort and degrades to [`CitationInfo::default`].
//!
//! # Examples
//!
//! ```no_run
//! use papernote::{client::MetadataFetcher, settings::Settings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = MetadataFetcher::new(&Settings::default());
//! let metadata = fetcher.fetch_metadata("https://arxiv.org/abs/1706.03762").await?;
//! println!("{} is cited by {} papers", metadata.title, metadata.num_cited_by);
//! # Ok(())
//! # }
//! ```

use reqwest::{header::USER_AGENT, StatusCode};

use super::*;

mod arxiv;
mod semantic_scholar;

pub use arxiv::*;
pub use semantic_scholar::*;

/// User agent sent with every metadata request.
pub const AGENT: &str = concat!("papernote/", env!("CARGO_PKG_VERSION"));

/// Fetches complete [`PaperMetadata`] for a normalized arXiv URL.
#[derive(Debug, Clone)]
pub struct MetadataFetcher {
  /// Bibliographic source
  arxiv:     ArxivClient,
  /// Citation-graph source
  citations: SemanticScholarClient,
}

impl MetadataFetcher {
  /// Builds both clients from the configured API endpoints.
  pub fn new(settings: &Settings) -> Self {
    let http = reqwest::Client::new();
    Self {
      arxiv:     ArxivClient::with_client(http.clone(), &settings.arxiv_api_url),
      citations: SemanticScholarClient::with_client(http, &settings.semantic_scholar_api_url),
    }
  }

  /// Fetches bibliographic metadata, then attaches citation information.
  ///
  /// # Errors
  ///
  /// - [`PapernoteError::InvalidUrl`] if the URL carries no identifier
  /// - [`PapernoteError::RemoteFetch`] if the arXiv API fails or returns no entry
  ///
  /// A failing citation lookup never causes an error.
  pub async fn fetch_metadata(&self, url: &str) -> Result<PaperMetadata> {
    let id = url::extract_id(url).ok_or_else(|| PapernoteError::InvalidUrl(url.to_string()))?;
    let metadata = self.arxiv.fetch_paper(&id).await?;
    let citations = self.citations.fetch_citation_info(&id).await;
    debug!(
      "Fetched {id}: {} citations, {} influential citing, {} influential cited",
      citations.num_cited_by,
      citations.influential_citations.len(),
      citations.influential_references.len()
    );
    Ok(metadata.with_citations(citations))
  }
}
