//! Prompts and replies on the terminal.
//!
//! Commands talk to the user only through [`UserInteraction`], so decisions
//! such as the related-paper mode or the summary prompt can be answered by a
//! person or defaulted with `--accept-defaults`.

use dialoguer::{Confirm, Input, Select};

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "⚠️ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Branch character for nested details
pub static TREE_BRANCH: &str = "├─";
/// Leaf character for the last nested detail
pub static TREE_LEAF: &str = "└─";

/// Something a command reports back to the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// Fetched paper metadata
  Metadata(&'a PaperMetadata),
  /// Settings as key and value
  Settings(&'a [(&'static str, String)]),
  /// A completed step
  Success(&'a str),
  /// Progress or neutral information
  Info(&'a str),
  /// A step that failed without stopping the command
  Warning(&'a str),
  /// The error that stopped the command
  Error(CliError),
}

/// Channel between commands and the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str, default: bool) -> Result<bool>;
  /// Asks for free text, possibly empty.
  fn prompt(&self, message: &str) -> Result<String>;
  /// Asks to pick one of `items`, returning its index.
  fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize>;
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;

  /// Asks whether related papers get their own notes.
  fn related_mode(&self) -> Result<RelatedPaperMode> {
    Ok(if self.confirm("Create notes for the influential related papers?", false)? {
      RelatedPaperMode::CreateNotes
    } else {
      RelatedPaperMode::Inline
    })
  }

  /// Asks which prompt the summary is generated with.
  fn prompt_choice(&self) -> Result<PromptChoice> {
    let items = ["Use the default prompt", "Write a custom prompt", "Cancel"];
    Ok(match self.select("How should the paper be summarized?", &items, 0)? {
      0 => PromptChoice::UseDefault,
      1 => PromptChoice::Custom(self.prompt("Summary prompt (empty for the default)")?),
      _ => PromptChoice::Cancel,
    })
  }
}

/// Interactive terminal backed by `dialoguer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
  /// Answer every question with its default instead of asking
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal; `accept_defaults` disables all prompts.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str, default: bool) -> Result<bool> {
    if self.accept_defaults {
      trace!("Accepting default {default} for {message:?}");
      return Ok(default);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{} {message}", style(PROMPT_PREFIX).cyan()))
        .default(default)
        .interact()?,
    )
  }

  fn prompt(&self, message: &str) -> Result<String> {
    if self.accept_defaults {
      return Ok(String::new());
    }
    Ok(
      Input::<String>::new()
        .with_prompt(format!("{} {message}", style(PROMPT_PREFIX).cyan()))
        .allow_empty(true)
        .interact_text()?,
    )
  }

  fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize> {
    if self.accept_defaults {
      return Ok(default);
    }
    Ok(
      Select::new()
        .with_prompt(format!("{} {message}", style(PROMPT_PREFIX).cyan()))
        .items(items)
        .default(default)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Metadata(metadata) => {
        println!("{} {}", style(INFO_PREFIX).cyan(), style(&metadata.title).white().bold());
        println!("   {} Authors: {}", style(TREE_BRANCH).dim(), metadata.authors);
        println!("   {} Published: {}", style(TREE_BRANCH).dim(), metadata.publish_date);
        println!(
          "   {} Cited by {} papers, citing {}",
          style(TREE_BRANCH).dim(),
          metadata.num_cited_by,
          metadata.num_citing
        );
        let link = style(&metadata.paper_link).blue().underlined();
        println!("   {} {link}", style(TREE_LEAF).dim());
      },
      ResponseContent::Settings(entries) => {
        let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or_default();
        for (key, value) in entries {
          println!("{:width$} = {value}", style(key).yellow());
        }
      },
      ResponseContent::Success(message) => {
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(message).green());
      },
      ResponseContent::Info(message) => println!("{} {message}", style(INFO_PREFIX).cyan()),
      ResponseContent::Warning(message) => {
        eprintln!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow());
      },
      ResponseContent::Error(error) => {
        eprintln!("{} {}", style(ERROR_PREFIX).red(), style(error).red());
      },
    }
    Ok(())
  }
}
