//! Paper metadata records produced by the fetchers.
//!
//! A [`PaperMetadata`] is built once per fetch and never mutated afterwards;
//! the merger and the related-paper materializer only read it.
//!
//! # Examples
//!
//! ```
//! use papernote::paper::{CitationInfo, PaperMetadata};
//!
//! let metadata = PaperMetadata {
//!   title: "Attention Is All You Need".into(),
//!   ..Default::default()
//! }
//! .with_citations(CitationInfo::default());
//!
//! assert_eq!(metadata.num_cited_by, 0);
//! assert!(metadata.influential_citations.is_empty());
//! ```

use super::*;

/// Normalized metadata for one arXiv paper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperMetadata {
  /// The paper's full title
  pub title:                  String,
  /// Canonical abstract page link reported by the arXiv API
  pub paper_link:             String,
  /// Publication date as `YYYY-MM-DD`
  pub publish_date:           String,
  /// Author names joined with `", "`
  pub authors:                String,
  /// Abstract with whitespace collapsed
  pub abstract_text:          String,
  /// Number of papers citing this one
  pub num_cited_by:           u64,
  /// Number of papers this one cites
  pub num_citing:             u64,
  /// Citing papers flagged as influential
  pub influential_citations:  Vec<PaperRef>,
  /// Cited papers flagged as influential
  pub influential_references: Vec<PaperRef>,
}

/// A lightweight projection of a citation-graph node.
///
/// Identity is the `paper_id`; nothing else is guaranteed to be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperRef {
  /// Semantic Scholar paper id
  pub paper_id:       String,
  /// Title as reported by Semantic Scholar
  pub title:          String,
  /// Semantic Scholar page for the paper
  pub url:            Option<String>,
  /// Publication venue
  pub venue:          Option<String>,
  /// Publication year
  pub year:           Option<i32>,
  /// Author names joined with `", "`
  pub authors:        String,
  /// arXiv identifier, when the paper is on arXiv
  pub arxiv_id:       Option<String>,
  /// DOI, when known
  pub doi:            Option<String>,
  /// Citation count of the related paper
  pub citation_count: Option<u64>,
  /// Citation intents such as `methodology` or `background`
  pub intent:         Vec<String>,
}

/// Citation counts and influential neighbours of a paper.
///
/// The default value is what a failed lookup degrades to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationInfo {
  /// Number of papers citing this one
  pub num_cited_by:           u64,
  /// Number of papers this one cites
  pub num_citing:             u64,
  /// Citing papers flagged as influential
  pub influential_citations:  Vec<PaperRef>,
  /// Cited papers flagged as influential
  pub influential_references: Vec<PaperRef>,
}

impl PaperMetadata {
  /// Attaches citation counts and related papers.
  pub fn with_citations(self, citations: CitationInfo) -> Self {
    Self {
      num_cited_by: citations.num_cited_by,
      num_citing: citations.num_citing,
      influential_citations: citations.influential_citations,
      influential_references: citations.influential_references,
      ..self
    }
  }
}

impl PaperRef {
  /// The abstract page for this paper, if it is on arXiv.
  pub fn arxiv_link(&self) -> Option<String> {
    self
      .arxiv_id
      .as_deref()
      .filter(|id| !id.is_empty())
      .map(|id| format!("https://arxiv.org/abs/{id}"))
  }
}

impl Display for PaperMetadata {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({}, {})", self.title, self.authors, self.publish_date)
  }
}
