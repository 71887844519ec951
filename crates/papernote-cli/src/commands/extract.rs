//! Module for the "Get Text From PDF" workflow.

use super::*;

/// Arguments that can be used for the [`Commands::Extract`]
#[derive(Args, Clone)]
pub struct ExtractArgs {
  /// PDF to transcribe, relative to the vault
  pub pdf: PathBuf,
}

/// Function for the [`Commands::Extract`] in the CLI.
pub async fn extract<I: UserInteraction>(
  interaction: &I,
  papernote: &Papernote,
  args: ExtractArgs,
) -> Result<()> {
  let message = format!("Extracting text from {}", args.pdf.display());
  interaction.reply(ResponseContent::Info(&message))?;
  let (note, created) = papernote.extract_pdf_to_note(&args.pdf).await?;

  let verb = if created { "Created" } else { "Updated" };
  interaction.reply(ResponseContent::Success(&format!("{verb} {}", note.display())))
}
