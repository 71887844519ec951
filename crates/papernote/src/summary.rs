//! Generated paper summaries.
//!
//! A summary request is the instruction prompt, the separator
//! [`TEXT_SEPARATOR`] and the extracted PDF transcript, sent as one text part.
//! The answer is appended to the note under [`SUMMARY_HEADING`] followed by a
//! short disclaimer.

use super::*;

/// Instruction prompt used unless the user supplies one.
pub const DEFAULT_PROMPT: &str = "You are a deep learning expert. You have received summaries \
of multiple pages from a long document. You need to create a comprehensive final summary based \
on these summaries. Please follow these steps:

Step 1: Extract key keywords and technical terms from all summaries. Bold each keyword and add a \
brief explanation.
Step 2: List the main points from all summaries. Include relevant keywords for each point.
Step 3: Elaborate on each point in 5-10 sentences. Use the extracted keywords in your explanations.
Step 4: Explain the relationships or connections between the points. Use keywords here as well.
Step 5: Briefly discuss the importance or potential impact of this information. Mention why the \
key keywords are important.

The final summary should faithfully reflect the essence of the entire document while being easy \
to read and informative.
Avoid vague or general statements and provide specific, substantial information.
Be sure to include and emphasize specific terms and content cited from other papers!
Bold these keywords and add a brief explanation if possible.
At the end of the summary, list all the main keywords once again.";

/// Placed between the prompt and the document text.
pub const TEXT_SEPARATOR: &str = "\n\nText to summarize: ";

/// Heading of the summary section.
pub const SUMMARY_HEADING: &str = "## Paper Summary";

/// Closing line of every summary section.
pub const AI_DISCLAIMER: &str = "This summary was generated by AI and may be inaccurate.";

/// The user's answer to the prompt customization question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptChoice {
  /// Use [`DEFAULT_PROMPT`].
  UseDefault,
  /// Use this prompt instead. A blank prompt falls back to the default.
  Custom(String),
  /// Abort without sending anything.
  Cancel,
}

impl PromptChoice {
  /// The prompt to send, or `None` for [`PromptChoice::Cancel`].
  pub fn prompt(&self) -> Option<&str> {
    match self {
      Self::UseDefault => Some(DEFAULT_PROMPT),
      Self::Custom(prompt) if prompt.trim().is_empty() => Some(DEFAULT_PROMPT),
      Self::Custom(prompt) => Some(prompt.as_str()),
      Self::Cancel => None,
    }
  }
}

/// Sends document text to Gemini for summarization.
#[derive(Debug, Clone)]
pub struct Summarizer {
  /// Gemini API base
  base_url:          String,
  /// Gemini model name
  model:             String,
  /// Gemini API key, possibly empty
  api_key:           String,
  /// Whether to ask for a translated answer
  translate_enabled: bool,
  /// Language of a translated answer
  target_language:   settings::Language,
}

impl Summarizer {
  /// Builds a summarizer from the Gemini and translation settings.
  pub fn new(settings: &Settings) -> Self {
    Self {
      base_url:          settings.gemini_api_url.clone(),
      model:             settings.gemini_model.clone(),
      api_key:           settings.api_key.clone(),
      translate_enabled: settings.translate_enabled,
      target_language:   settings.target_language,
    }
  }

  /// Fails with [`PapernoteError::Config`] when no API key is set.
  pub fn ensure_configured(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(PapernoteError::Config("Gemini API key is not configured".to_string()));
    }
    Ok(())
  }

  /// Concatenates prompt, separator and text into the request payload.
  pub fn build_payload(&self, prompt: &str, text: &str) -> String {
    let mut payload = prompt.to_string();
    if self.translate_enabled {
      payload.push_str(&format!(
        "\nWrite the entire answer in {}.",
        capitalize(&self.target_language.to_string())
      ));
    }
    payload.push_str(TEXT_SEPARATOR);
    payload.push_str(text);
    payload
  }

  /// Summarizes `text`, or returns `None` when the user cancelled.
  ///
  /// A cancelled request never touches the network.
  pub async fn summarize(&self, text: &str, choice: &PromptChoice) -> Result<Option<String>> {
    let Some(prompt) = choice.prompt() else {
      debug!("Summarization cancelled");
      return Ok(None);
    };
    self.ensure_configured()?;

    let answer = llm::GeminiRequest::new()
      .with_base_url(&self.base_url)
      .with_model(&self.model)
      .with_api_key(&self.api_key)
      .with_text(&self.build_payload(prompt, text))
      .send()
      .await?;
    Ok(Some(answer))
  }
}

/// The summary section appended to a note.
pub fn format_summary(summary: &str) -> String {
  format!("{SUMMARY_HEADING}\n\n{summary}\n\n---\n{AI_DISCLAIMER}")
}

/// Appends a formatted summary to note text.
pub fn append_summary(content: &str, summary: &str) -> String {
  format!("{content}\n\n{}", format_summary(summary))
}

/// Uppercases the first character.
fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
