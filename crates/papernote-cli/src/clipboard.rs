//! Source of the arXiv link a command works on.

use arboard::Clipboard;

use super::*;

/// Parses `url` when given, otherwise the current clipboard text.
///
/// # Errors
///
/// [`CliError::Clipboard`] when the clipboard cannot be read, or
/// [`PapernoteError::InvalidUrl`] when the text is not an arXiv link.
pub fn arxiv_url(url: Option<&str>) -> Result<ArxivUrl> {
  let raw = match url {
    Some(url) => url.to_string(),
    None => {
      let text = Clipboard::new()?.get_text()?;
      debug!("Read {} characters from the clipboard", text.len());
      text
    },
  };
  Ok(ArxivUrl::parse(&raw)?)
}
