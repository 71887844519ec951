//! Semantic Scholar citation-graph client.
//!
//! Uses the v1 paper endpoint keyed by `arXiv:<id>`, whose body carries
//! `numCitedBy`, `numCiting` and the full `citations`/`references` lists with
//! an `isInfluential` flag on each item.

use super::*;

/// Default base of the Semantic Scholar v1 API.
pub const DEFAULT_SEMANTIC_SCHOLAR_API_URL: &str = "https://api.semanticscholar.org/v1";

/// Client for Semantic Scholar citation lookups.
#[derive(Debug, Clone)]
pub struct SemanticScholarClient {
  /// Shared HTTP client
  http:     reqwest::Client,
  /// API base, without the `/paper` suffix
  base_url: String,
}

/// Paper body returned by `/paper/arXiv:<id>`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct S2Paper {
  /// Citation count
  num_cited_by: Option<u64>,
  /// Reference count
  num_citing:   Option<u64>,
  /// Papers citing this one
  citations:    Option<Vec<S2Link>>,
  /// Papers this one cites
  references:   Option<Vec<S2Link>>,
}

/// One citation or reference item.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct S2Link {
  /// Whether Semantic Scholar marks the link as influential
  is_influential: Option<bool>,
  /// Semantic Scholar paper id
  paper_id:       Option<String>,
  /// Paper title
  title:          Option<String>,
  /// Semantic Scholar page
  url:            Option<String>,
  /// Publication venue
  venue:          Option<String>,
  /// Publication year
  year:           Option<i32>,
  /// Author list
  authors:        Option<Vec<S2Author>>,
  /// arXiv identifier, when the paper is on arXiv
  arxiv_id:       Option<String>,
  /// Digital object identifier
  doi:            Option<String>,
  /// Number of papers citing it
  citation_count: Option<u64>,
  /// Citation intents such as `background` or `methodology`
  intent:         Option<Vec<String>>,
}

/// Author stub inside a link.
#[derive(Debug, Default, Deserialize)]
struct S2Author {
  /// Display name
  name: Option<String>,
}

impl Default for SemanticScholarClient {
  fn default() -> Self { Self::new(DEFAULT_SEMANTIC_SCHOLAR_API_URL) }
}

impl SemanticScholarClient {
  /// Creates a client against `base_url`.
  pub fn new(base_url: &str) -> Self { Self::with_client(reqwest::Client::new(), base_url) }

  /// Creates a client reusing an existing HTTP client.
  pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
    Self { http, base_url: base_url.trim_end_matches('/').to_string() }
  }

  /// Looks up citation information for an arXiv identifier.
  ///
  /// Any failure (network, non-200 status, unparsable body) is logged and
  /// replaced by [`CitationInfo::default`], so this never fails.
  pub async fn fetch_citation_info(&self, arxiv_id: &str) -> CitationInfo {
    match self.try_fetch_citation_info(arxiv_id).await {
      Ok(info) => info,
      Err(e) => {
        warn!("Citation lookup for {arxiv_id} failed, continuing without citations: {e}");
        CitationInfo::default()
      },
    }
  }

  /// The fallible lookup behind [`Self::fetch_citation_info`].
  async fn try_fetch_citation_info(&self, arxiv_id: &str) -> Result<CitationInfo> {
    let endpoint = format!("{}/paper/arXiv:{arxiv_id}", self.base_url);
    debug!("Querying Semantic Scholar at {endpoint}");

    let response = self.http.get(&endpoint).header(USER_AGENT, AGENT).send().await?;
    if response.status() != StatusCode::OK {
      return Err(PapernoteError::RemoteFetch(format!(
        "Semantic Scholar request failed: {}",
        response.status()
      )));
    }

    let body = response.bytes().await?;
    let paper: S2Paper = serde_json::from_slice(&body)?;
    Ok(paper.into())
  }
}

impl From<S2Paper> for CitationInfo {
  fn from(paper: S2Paper) -> Self {
    Self {
      num_cited_by:           paper.num_cited_by.unwrap_or(0),
      num_citing:             paper.num_citing.unwrap_or(0),
      influential_citations:  influential(paper.citations),
      influential_references: influential(paper.references),
    }
  }
}

/// Keeps the items flagged `isInfluential` and projects them to [`PaperRef`].
fn influential(links: Option<Vec<S2Link>>) -> Vec<PaperRef> {
  links
    .unwrap_or_default()
    .into_iter()
    .filter(|link| link.is_influential.unwrap_or(false))
    .map(|link| PaperRef {
      paper_id:       link.paper_id.unwrap_or_default(),
      title:          link.title.unwrap_or_default(),
      url:            link.url,
      venue:          link.venue,
      year:           link.year,
      authors:        link
        .authors
        .unwrap_or_default()
        .into_iter()
        .filter_map(|author| author.name)
        .collect::<Vec<_>>()
        .join(", "),
      arxiv_id:       link.arxiv_id,
      doi:            link.doi,
      citation_count: link.citation_count,
      intent:         link.intent.unwrap_or_default(),
    })
    .collect()
}
