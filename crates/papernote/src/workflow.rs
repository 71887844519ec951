//! End-to-end note workflows.
//!
//! [`Papernote`] wires the clients, the merger and the vault together into the
//! operations a user invokes. Each operation re-reads the note it changes right
//! before writing it. Failures of one phase are returned to the caller, who
//! decides whether later phases still run.

use chrono::Local;

use super::*;

/// Outcome of [`Papernote::insert_metadata`].
#[derive(Debug)]
pub struct MetadataReport {
  /// Where the note lives now, renamed or not
  pub note:         PathBuf,
  /// Whether the note was renamed after the paper title
  pub renamed:      bool,
  /// Why the rename failed; the merged content is kept regardless
  pub rename_error: Option<PapernoteError>,
}

/// Paper-note operations over one vault.
#[derive(Debug, Clone)]
pub struct Papernote {
  /// Settings the components were built from
  settings:   Settings,
  /// Note directory
  vault:      Vault,
  /// arXiv and Semantic Scholar lookups
  fetcher:    MetadataFetcher,
  /// PDF retrieval
  downloader: PdfDownloader,
  /// PDF text extraction
  extractor:  PdfExtractor,
  /// Gemini summaries
  summarizer: Summarizer,
}

impl Papernote {
  /// Builds every component from `settings`.
  pub fn new(settings: &Settings, vault: Vault) -> Self {
    Self {
      settings: settings.clone(),
      vault,
      fetcher: MetadataFetcher::new(settings),
      downloader: PdfDownloader::new(settings),
      extractor: PdfExtractor::new(),
      summarizer: Summarizer::new(settings),
    }
  }

  /// The settings in use.
  pub fn settings(&self) -> &Settings { &self.settings }

  /// The vault notes are written to.
  pub fn vault(&self) -> &Vault { &self.vault }

  /// Resolves the note to work on, creating it when needed.
  ///
  /// Without a path, a note named `Arxiv Paper - YYYY-MM-DD.md` is used in the
  /// vault root. Returns the note path and whether it was created.
  pub async fn ensure_note(&self, note: Option<&Path>) -> Result<(PathBuf, bool)> {
    let path = match note {
      Some(note) => self.vault.resolve(note),
      None => self.vault.resolve(format!("Arxiv Paper - {}.md", Local::now().format("%Y-%m-%d"))),
    };

    match self.vault.create_note(&path, "").await {
      Ok(path) => Ok((path, true)),
      Err(PapernoteError::DuplicateFile(path)) => Ok((path, false)),
      Err(e) => Err(e),
    }
  }

  /// Fetches metadata and citation information for `url`.
  pub async fn fetch_metadata(&self, url: &ArxivUrl) -> Result<PaperMetadata> {
    self.fetcher.fetch_metadata(url.as_str()).await
  }

  /// Merges `metadata` into `note`, then renames it after the paper title.
  ///
  /// # Errors
  ///
  /// Fails when the note cannot be read, parsed or written. A failed rename is
  /// not an error; it is logged and returned in the [`MetadataReport`].
  pub async fn insert_metadata(
    &self,
    note: &Path,
    metadata: &PaperMetadata,
  ) -> Result<MetadataReport> {
    let content = self.vault.read(note).await?;
    let merged = merge::merge_metadata(&content, metadata)?;
    self.vault.modify(note, &merged).await?;

    let original = self.vault.resolve(note);
    Ok(match self.vault.rename_to_title(&original, &metadata.title).await {
      Ok(Some(renamed)) => MetadataReport { note: renamed, renamed: true, rename_error: None },
      Ok(None) => MetadataReport { note: original, renamed: false, rename_error: None },
      Err(e) => {
        warn!("Could not rename {} after its title: {e}", original.display());
        MetadataReport { note: original, renamed: false, rename_error: Some(e) }
      },
    })
  }

  /// Appends the influential-paper sections to `note`.
  pub async fn insert_related_papers(
    &self,
    note: &Path,
    metadata: &PaperMetadata,
    mode: RelatedPaperMode,
  ) -> Result<()> {
    RelatedPapers::new(&self.vault).apply(note, metadata, mode).await
  }

  /// Downloads the PDF for `url` into the configured folder.
  pub async fn download_pdf(&self, url: &ArxivUrl) -> Result<PathBuf> {
    self.downloader.download(url, &self.vault).await
  }

  /// Summarizes the paper at `url` and appends the summary to `note`.
  ///
  /// Returns `None`, without any request, when the user cancelled.
  pub async fn summarize(
    &self,
    note: &Path,
    url: &ArxivUrl,
    choice: &PromptChoice,
  ) -> Result<Option<String>> {
    if choice.prompt().is_none() {
      debug!("Summarization cancelled before download");
      return Ok(None);
    }
    self.summarizer.ensure_configured()?;

    let bytes = self.downloader.fetch(url).await?;
    let text = self.extractor.extract_text(&bytes)?;
    let Some(generated) = self.summarizer.summarize(&text, choice).await? else {
      return Ok(None);
    };

    let content = self.vault.read(note).await?;
    self.vault.modify(note, &summary::append_summary(&content, &generated)).await?;
    Ok(Some(generated))
  }

  /// Writes the transcript of `pdf` to `<stem>-extracted.md` next to it.
  ///
  /// An existing transcript note is overwritten. Returns the note path and
  /// whether it was created.
  pub async fn extract_pdf_to_note(&self, pdf: &Path) -> Result<(PathBuf, bool)> {
    let bytes = self.vault.read_binary(pdf).await?;
    let text = self.extractor.extract_text(&bytes)?;

    let pdf = self.vault.resolve(pdf);
    let stem = pdf.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let note = pdf.with_file_name(format!("{stem}-extracted.md"));

    match self.vault.create_note(&note, &text).await {
      Ok(note) => Ok((note, true)),
      Err(PapernoteError::DuplicateFile(note)) => {
        self.vault.modify(&note, &text).await?;
        Ok((note, false))
      },
      Err(e) => Err(e),
    }
  }
}
