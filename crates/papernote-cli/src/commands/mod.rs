//! Subcommands of the `papernote` binary.

use super::*;

pub mod config;
pub mod download;
pub mod extract;
pub mod metadata;
pub mod summarize;

pub use config::{config, ConfigCommands};
pub use download::{download, DownloadArgs};
pub use extract::{extract, ExtractArgs};
pub use metadata::{metadata, MetadataArgs};
pub use summarize::{summarize, SummarizeArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Fetch arXiv metadata for a link and merge it into a note
  Metadata(MetadataArgs),

  /// Download the PDF of a paper into the configured folder
  Download(DownloadArgs),

  /// Append a Gemini summary of a paper to a note
  Summarize(SummarizeArgs),

  /// Write the text of a PDF into `<name>-extracted.md` next to it
  Extract(ExtractArgs),

  /// Show or change the persisted settings
  Config {
    /// The settings operation to run
    #[command(subcommand)]
    cmd: ConfigCommands,
  },
}
