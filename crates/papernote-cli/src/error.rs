//! Error types for the papernote CLI.

use thiserror::Error;

use super::*;

/// Error type alias used for the CLI.
pub type Result<T> = core::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
  /// Error from the papernote library
  #[error(transparent)]
  Papernote(#[from] PapernoteError),

  /// A prompt could not be shown or answered
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// The system clipboard could not be read
  #[error("Clipboard unavailable: {0}")]
  Clipboard(#[from] arboard::Error),

  /// Terminal or file system failure outside the library
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
