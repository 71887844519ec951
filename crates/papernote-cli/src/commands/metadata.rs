//! Module for the "Fetch Metadata" workflow.

use super::*;

/// How the related-paper sections are written.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelatedChoice {
  /// Create a sibling note per paper and link it
  Create,
  /// List the titles in the note
  Inline,
  /// Ask every time
  Ask,
}

/// Arguments that can be used for the [`Commands::Metadata`]
#[derive(Args, Clone)]
pub struct MetadataArgs {
  /// Note to fill, relative to the vault. Defaults to today's
  /// `Arxiv Paper - YYYY-MM-DD.md`, created when missing.
  #[arg(long)]
  pub note: Option<PathBuf>,

  /// arXiv link to use instead of the clipboard
  #[arg(long)]
  pub url: Option<String>,

  /// How influential citing and cited papers are written
  #[arg(long, value_enum, default_value = "ask")]
  pub related: RelatedChoice,
}

/// Function for the [`Commands::Metadata`] in the CLI.
///
/// A failed rename is reported as a warning and the related-paper phase still
/// runs against the note under its old name.
pub async fn metadata<I: UserInteraction>(
  interaction: &I,
  papernote: &Papernote,
  args: MetadataArgs,
) -> Result<()> {
  let MetadataArgs { note, url, related } = args;
  let url = clipboard::arxiv_url(url.as_deref())?;

  let (note, created) = papernote.ensure_note(note.as_deref()).await?;
  if created {
    interaction.reply(ResponseContent::Info(&format!("Created note {}", note.display())))?;
  }

  interaction.reply(ResponseContent::Info(&format!("Fetching metadata for {}", url.as_str())))?;
  let paper = papernote.fetch_metadata(&url).await?;
  interaction.reply(ResponseContent::Metadata(&paper))?;

  let report = papernote.insert_metadata(&note, &paper).await?;
  if report.renamed {
    interaction
      .reply(ResponseContent::Success(&format!("Renamed note to {}", report.note.display())))?;
  }
  if let Some(e) = &report.rename_error {
    interaction.reply(ResponseContent::Warning(&format!("Kept the note name: {e}")))?;
  }

  let mode = match related {
    RelatedChoice::Create => RelatedPaperMode::CreateNotes,
    RelatedChoice::Inline => RelatedPaperMode::Inline,
    RelatedChoice::Ask => interaction.related_mode()?,
  };
  papernote.insert_related_papers(&report.note, &paper, mode).await?;

  interaction.reply(ResponseContent::Success(&format!(
    "Metadata inserted into {}",
    report.note.display()
  )))
}
