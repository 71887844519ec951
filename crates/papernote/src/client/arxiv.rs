//! arXiv Atom API client.
//!
//! A query such as `https://export.arxiv.org/api/query?id_list=1706.03762`
//! answers with an Atom feed; the first `<entry>` carries the paper:
//!
//! ```xml
//! <feed xmlns="http://www.w3.org/2005/Atom">
//!   <entry>
//!     <id>http://arxiv.org/abs/1706.03762v7</id>
//!     <published>2017-06-12T17:57:34Z</published>
//!     <title>Attention Is All You Need</title>
//!     <summary>The dominant sequence transduction models ...</summary>
//!     <author><name>Ashish Vaswani</name></author>
//!   </entry>
//! </feed>
//! ```

use super::*;

/// Default base of the arXiv export API.
pub const DEFAULT_ARXIV_API_URL: &str = "https://export.arxiv.org/api";

/// Client for the arXiv export API.
#[derive(Debug, Clone)]
pub struct ArxivClient {
  /// Shared HTTP client
  http:     reqwest::Client,
  /// API base, without the `/query` suffix
  base_url: String,
}

/// Atom feed root.
#[derive(Debug, Deserialize)]
struct Feed {
  /// Matching papers, at most one for an `id_list` query
  #[serde(default)]
  entry: Vec<Entry>,
}

/// One paper in the feed.
#[derive(Debug, Deserialize)]
struct Entry {
  /// Versioned abstract link
  id:        Option<String>,
  /// First-version timestamp
  published: Option<String>,
  /// Hard-wrapped title
  title:     Option<String>,
  /// Hard-wrapped abstract
  summary:   Option<String>,
  /// Authors in listed order
  #[serde(default)]
  author:    Vec<EntryAuthor>,
}

/// An `<author>` element.
#[derive(Debug, Deserialize)]
struct EntryAuthor {
  /// Display name
  name: Option<String>,
}

impl Default for ArxivClient {
  fn default() -> Self { Self::new(DEFAULT_ARXIV_API_URL) }
}

impl ArxivClient {
  /// Creates a client against `base_url`.
  pub fn new(base_url: &str) -> Self { Self::with_client(reqwest::Client::new(), base_url) }

  /// Creates a client reusing an existing HTTP client.
  pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
    Self { http, base_url: base_url.trim_end_matches('/').to_string() }
  }

  /// Fetches title, link, date, authors and abstract for `id`.
  ///
  /// Citation fields are left empty; see [`MetadataFetcher`].
  pub async fn fetch_paper(&self, id: &str) -> Result<PaperMetadata> {
    let endpoint = format!("{}/query", self.base_url);
    debug!("Querying arXiv API at {endpoint} for {id}");

    let response = self
      .http
      .get(&endpoint)
      .query(&[("id_list", id)])
      .header(USER_AGENT, AGENT)
      .send()
      .await?;

    if response.status() != StatusCode::OK {
      return Err(PapernoteError::RemoteFetch(format!(
        "arXiv API request failed: {}",
        response.status()
      )));
    }

    let body = response.text().await?;
    trace!("arXiv response for {id}: {body}");
    parse_feed(&body)
  }
}

/// Extracts the first entry of an Atom feed.
fn parse_feed(xml: &str) -> Result<PaperMetadata> {
  let feed: Feed = quick_xml::de::from_str(xml)
    .map_err(|e| PapernoteError::RemoteFetch(format!("Malformed arXiv response: {e}")))?;

  let entry = feed
    .entry
    .into_iter()
    .next()
    .ok_or_else(|| PapernoteError::RemoteFetch("Paper information not found".to_string()))?;

  let title = entry.title.as_deref().map(format::collapse_whitespace).unwrap_or_default();
  let publish_date = entry
    .published
    .as_deref()
    .and_then(|published| published.trim().split('T').next())
    .filter(|date| !date.is_empty())
    .unwrap_or("No date")
    .to_string();
  let authors = entry
    .author
    .iter()
    .filter_map(|author| author.name.as_deref())
    .map(str::trim)
    .collect::<Vec<_>>()
    .join(", ");
  let abstract_text = entry.summary.as_deref().map(format::collapse_whitespace).unwrap_or_default();

  Ok(PaperMetadata {
    title: if title.is_empty() { "No title".to_string() } else { title },
    paper_link: entry.id.map(|id| id.trim().to_string()).unwrap_or_default(),
    publish_date,
    authors,
    abstract_text: if abstract_text.is_empty() {
      "No abstract available".to_string()
    } else {
      abstract_text
    },
    ..Default::default()
  })
}
