//! Module for the "Summarize Paper" workflow.

use super::*;

/// Arguments that can be used for the [`Commands::Summarize`]
#[derive(Args, Clone)]
pub struct SummarizeArgs {
  /// Note the summary is appended to, relative to the vault. Defaults to
  /// today's `Arxiv Paper - YYYY-MM-DD.md`, created when missing.
  #[arg(long)]
  pub note: Option<PathBuf>,

  /// arXiv link to use instead of the clipboard
  #[arg(long)]
  pub url: Option<String>,

  /// Instruction prompt to use instead of the default
  #[arg(long, group = "prompt_choice")]
  pub prompt: Option<String>,

  /// Use the default prompt without asking
  #[arg(long, group = "prompt_choice")]
  pub default_prompt: bool,
}

/// Function for the [`Commands::Summarize`] in the CLI.
///
/// The API key is checked before the clipboard is read or anything is asked.
pub async fn summarize<I: UserInteraction>(
  interaction: &I,
  papernote: &Papernote,
  args: SummarizeArgs,
) -> Result<()> {
  let SummarizeArgs { note, url, prompt, default_prompt } = args;
  papernote.settings().require_api_key()?;
  let url = clipboard::arxiv_url(url.as_deref())?;

  let choice = match prompt {
    Some(prompt) => PromptChoice::Custom(prompt),
    None if default_prompt => PromptChoice::UseDefault,
    None => interaction.prompt_choice()?,
  };
  if choice == PromptChoice::Cancel {
    return interaction.reply(ResponseContent::Info("Summarization cancelled"));
  }

  let (note, _) = papernote.ensure_note(note.as_deref()).await?;
  interaction.reply(ResponseContent::Info(&format!("Summarizing {}", url.as_str())))?;
  match papernote.summarize(&note, &url, &choice).await? {
    Some(_) => interaction
      .reply(ResponseContent::Success(&format!("Summary added to {}", note.display()))),
    None => interaction.reply(ResponseContent::Info("Summarization cancelled")),
  }
}
