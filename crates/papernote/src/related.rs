//! Influential-paper sections and sibling notes.
//!
//! After a metadata merge, a note can list the influential papers around it
//! under two fixed headings. Each entry is either a plain title bullet or a
//! `[[wiki link]]` to a sibling note created next to the source note, holding
//! only a frontmatter block describing the related paper.

use super::*;

/// Heading listing influential papers that cite the source paper.
pub const CITED_BY_HEADING: &str = "## Influential Papers Cited By";

/// Heading listing influential papers the source paper cites.
pub const CITING_HEADING: &str = "## Influential Papers Citing";

/// Line written under a heading when there are no papers to list.
pub const NO_INFORMATION: &str = "No information available.";

/// Placeholder for missing values in sibling notes.
const NOT_AVAILABLE: &str = "N/A";

/// How related papers are written into the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedPaperMode {
  /// Create a sibling note per paper and link it.
  CreateNotes,
  /// Write each paper's title as a bullet.
  Inline,
}

impl FromStr for RelatedPaperMode {
  type Err = PapernoteError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "create" | "create-notes" | "notes" => Ok(Self::CreateNotes),
      "inline" => Ok(Self::Inline),
      other => Err(PapernoteError::Config(format!("Unknown related paper mode: {other}"))),
    }
  }
}

/// Writes related-paper sections into notes of a vault.
#[derive(Debug, Clone, Copy)]
pub struct RelatedPapers<'a> {
  /// Vault holding the source note and its siblings
  vault: &'a Vault,
}

impl<'a> RelatedPapers<'a> {
  /// Creates a materializer over `vault`.
  pub fn new(vault: &'a Vault) -> Self { Self { vault } }

  /// Adds both influential-paper sections to `note`.
  ///
  /// The note is re-read right before the write. A section whose heading is
  /// already present is left untouched.
  pub async fn apply(
    &self,
    note: &Path,
    metadata: &PaperMetadata,
    mode: RelatedPaperMode,
  ) -> Result<()> {
    let mut content = self.vault.read(note).await?;
    let directory = self.vault.resolve(note).parent().map(Path::to_path_buf).unwrap_or_default();

    for (heading, papers) in [
      (CITED_BY_HEADING, &metadata.influential_citations),
      (CITING_HEADING, &metadata.influential_references),
    ] {
      if content.contains(heading) {
        trace!("Section {heading} already present");
        continue;
      }
      let lines = match mode {
        RelatedPaperMode::Inline => inline_lines(papers),
        RelatedPaperMode::CreateNotes => self.link_lines(&directory, papers).await?,
      };
      content = append_section(&content, heading, &lines);
    }

    self.vault.modify(note, &content).await
  }

  /// Creates sibling notes for `papers` and returns their link bullets.
  async fn link_lines(&self, directory: &Path, papers: &[PaperRef]) -> Result<String> {
    let mut links = String::new();
    for paper in titled(papers) {
      let stem = format::sanitize_filename(&paper.title);
      let path = directory.join(format!("{stem}.md"));
      match self.vault.create_note(&path, &sibling_note(paper)?).await {
        Ok(_) => {},
        Err(PapernoteError::DuplicateFile(existing)) =>
          warn!("Sibling note {} already exists, linking it as is", existing.display()),
        Err(e) => return Err(e),
      }
      links.push_str(&format!("- [[{stem}]]\n"));
    }
    Ok(or_no_information(links))
  }
}

/// Papers with a title to show; untitled ones get neither a bullet nor a note.
fn titled(papers: &[PaperRef]) -> impl Iterator<Item = &PaperRef> {
  papers.iter().filter(|paper| {
    let blank = paper.title.trim().is_empty();
    if blank {
      debug!("Skipping related paper {:?} without a title", paper.paper_id);
    }
    !blank
  })
}

/// `lines`, or [`NO_INFORMATION`] when there is nothing to list.
fn or_no_information(lines: String) -> String {
  if lines.is_empty() { format!("{NO_INFORMATION}\n") } else { lines }
}

/// One title bullet per paper, or [`NO_INFORMATION`].
fn inline_lines(papers: &[PaperRef]) -> String {
  or_no_information(titled(papers).map(|paper| format!("- {}\n", paper.title)).collect())
}

/// Appends `heading` and its lines, separated from `content` by a blank line.
pub fn append_section(content: &str, heading: &str, lines: &str) -> String {
  format!("{content}\n\n{heading}\n\n{lines}")
}

/// Frontmatter-only body of a sibling note.
pub fn sibling_note(paper: &PaperRef) -> Result<String> {
  let text = |value: Option<&str>| {
    Value::String(value.filter(|s| !s.is_empty()).unwrap_or(NOT_AVAILABLE).to_string())
  };
  let number = |value: Option<u64>| match value {
    Some(n) if n > 0 => Value::Number(n.into()),
    _ => Value::String(NOT_AVAILABLE.to_string()),
  };

  let mut frontmatter = Mapping::new();
  frontmatter.insert("title".into(), Value::String(paper.title.clone()));
  frontmatter.insert("authors".into(), text(Some(&paper.authors)));
  frontmatter.insert("year".into(), number(paper.year.and_then(|y| u64::try_from(y).ok())));
  frontmatter.insert("venue".into(), text(paper.venue.as_deref()));
  frontmatter.insert("paper_link".into(), Value::String(paper.arxiv_link().unwrap_or_default()));
  frontmatter.insert(
    "semanticscholar_link".into(),
    Value::String(paper.url.clone().filter(|url| !url.is_empty()).unwrap_or_else(|| "#".into())),
  );
  frontmatter.insert("arxiv_id".into(), text(paper.arxiv_id.as_deref()));
  frontmatter.insert("doi".into(), text(paper.doi.as_deref()));
  frontmatter.insert("citations".into(), number(paper.citation_count));
  frontmatter.insert(
    "intent".into(),
    Value::Sequence(paper.intent.iter().cloned().map(Value::String).collect()),
  );

  Ok(format!("---\n{}---", serde_yaml::to_string(&frontmatter)?))
}
