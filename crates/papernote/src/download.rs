//! PDF retrieval into the configured download folder.

use reqwest::StatusCode;

use super::*;

/// Downloads arXiv PDFs.
#[derive(Debug, Clone)]
pub struct PdfDownloader {
  /// Shared HTTP client
  http:          reqwest::Client,
  /// Base that `<id>.pdf` is appended to
  pdf_url:       String,
  /// Folder inside the vault the files land in
  download_path: String,
}

impl PdfDownloader {
  /// Builds a downloader from the configured PDF host and folder.
  pub fn new(settings: &Settings) -> Self {
    Self {
      http:          reqwest::Client::new(),
      pdf_url:       settings.arxiv_pdf_url.clone(),
      download_path: settings.download_path.clone(),
    }
  }

  /// Fetches the PDF bytes for `url`.
  pub async fn fetch(&self, url: &ArxivUrl) -> Result<Vec<u8>> {
    let endpoint = url::pdf_url(&self.pdf_url, &url.id()?);
    debug!("Downloading PDF from {endpoint}");

    let response = self.http.get(&endpoint).send().await?;
    if response.status() != StatusCode::OK {
      return Err(PapernoteError::RemoteFetch(format!(
        "PDF download failed: {}",
        response.status()
      )));
    }
    Ok(response.bytes().await?.to_vec())
  }

  /// Downloads the PDF to `<download_path>/<id>.pdf` inside `vault`.
  ///
  /// # Errors
  ///
  /// [`PapernoteError::Config`] when no download folder is configured; this is
  /// checked before any request is made.
  pub async fn download(&self, url: &ArxivUrl, vault: &Vault) -> Result<PathBuf> {
    if self.download_path.trim().is_empty() {
      return Err(PapernoteError::Config("PDF download path is not configured".to_string()));
    }
    let id = url.id()?;
    let bytes = self.fetch(url).await?;

    let directory = vault.create_dir(self.download_path.trim()).await?;
    vault.write_binary(directory.join(format!("{id}.pdf")), &bytes).await
  }
}
