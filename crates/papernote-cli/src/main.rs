//! Command line interface for the papernote arXiv note system.
//!
//! This crate provides the `papernote` binary on top of the `papernote`
//! library. It supports operations like:
//! - Fetching arXiv metadata into a Markdown note
//! - Downloading a paper's PDF into the vault
//! - Summarizing a paper with Gemini
//! - Transcribing a local PDF into a note
//! - Showing and changing persisted settings
//!
//! # Usage
//!
//! ```bash
//! # Fill a note from the arXiv link on the clipboard
//! papernote metadata --note "Reading list.md"
//!
//! # Same, for an explicit link, creating sibling notes for related papers
//! papernote metadata --url https://arxiv.org/abs/1706.03762 --related create
//!
//! # Download the PDF into the configured folder
//! papernote config set download_path pdfs
//! papernote download --url https://arxiv.org/abs/1706.03762
//!
//! # Append a Gemini summary to a note
//! papernote config set api_key <key>
//! papernote summarize --note "Attention Is All You Need.md" --default-prompt
//! ```
//!
//! Every command works on the vault given by `--vault` (the current directory
//! by default). Failures of a command are reported as styled lines; the
//! process only exits non-zero when its settings cannot be loaded.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand, ValueEnum};
use console::style;
use papernote::{
  paper::PaperMetadata, prelude::*, settings::Settings, url::ArxivUrl, vault::Vault, Papernote,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod clipboard;
pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Fetch, merge and summarize arXiv papers into Markdown notes")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Directory holding the notes. Relative note and PDF paths are resolved
  /// against it. Defaults to the current directory.
  #[arg(long, global = true)]
  vault: Option<PathBuf>,

  /// Path to the settings file. If not specified, uses the default
  /// platform-specific config directory.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Entry point for the papernote CLI application
///
/// Loads the settings, builds the [`Papernote`] for the vault and runs the
/// requested command. Any error of the command itself is printed and
/// swallowed.
///
/// # Errors
///
/// Returns [`CliError`] when the settings file cannot be read or parsed, or
/// when the current directory is unavailable as a default vault.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
  trace!("Using settings at {}", settings_path.display());
  let settings = Settings::load(&settings_path)?;

  let root = match &cli.vault {
    Some(vault) => vault.clone(),
    None => std::env::current_dir()?,
  };
  debug!("Using vault at {}", root.display());
  let papernote = Papernote::new(&settings, Vault::new(root));
  let interaction = Terminal::new(cli.accept_defaults);

  let outcome = match cli.command {
    Commands::Metadata(args) => metadata(&interaction, &papernote, args).await,
    Commands::Download(args) => download(&interaction, &papernote, args).await,
    Commands::Summarize(args) => summarize(&interaction, &papernote, args).await,
    Commands::Extract(args) => extract(&interaction, &papernote, args).await,
    Commands::Config { cmd } => config(&interaction, &settings_path, cmd),
  };

  if let Err(e) = outcome {
    interaction.reply(ResponseContent::Error(e))?;
  }
  Ok(())
}
