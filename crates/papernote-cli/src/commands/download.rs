//! Module for the "Download PDF" workflow.

use super::*;

/// Arguments that can be used for the [`Commands::Download`]
#[derive(Args, Clone)]
pub struct DownloadArgs {
  /// arXiv link to use instead of the clipboard
  #[arg(long)]
  pub url: Option<String>,
}

/// Function for the [`Commands::Download`] in the CLI.
pub async fn download<I: UserInteraction>(
  interaction: &I,
  papernote: &Papernote,
  args: DownloadArgs,
) -> Result<()> {
  let url = clipboard::arxiv_url(args.url.as_deref())?;
  papernote.settings().require_download_path()?;

  interaction.reply(ResponseContent::Info(&format!("Downloading PDF for {}", url.as_str())))?;
  let path = papernote.download_pdf(&url).await?;
  interaction.reply(ResponseContent::Success(&format!("PDF saved to {}", path.display())))
}
