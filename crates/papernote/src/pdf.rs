//! Page-by-page PDF text extraction.
//!
//! Text is taken in the order `lopdf` decodes it from each page's content
//! stream. There is no layout or column reconstruction and no OCR: scanned
//! pages come out empty.
//!
//! Each page's text is normalized to single spaces: every run of whitespace,
//! whether between decoded fragments or inside one, becomes one space, so
//! line breaks and indentation within a page are not preserved.
//!
//! # Examples
//!
//! ```no_run
//! use papernote::pdf::PdfExtractor;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("1706.03762.pdf")?;
//! let transcript = PdfExtractor::new().extract_text(&bytes)?;
//! assert!(transcript.starts_with("\n--- Page 1 ---\n"));
//! # Ok(())
//! # }
//! ```

use lopdf::Dictionary;

use super::*;

/// Text and metadata of a whole PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfContent {
  /// Document information dictionary
  pub metadata: PdfMetadata,
  /// Pages in order
  pub pages:    Vec<PageContent>,
}

/// Fields of the PDF `Info` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfMetadata {
  /// `Title` entry
  pub title:    Option<String>,
  /// `Author` entry
  pub author:   Option<String>,
  /// `Subject` entry
  pub subject:  Option<String>,
  /// `Keywords` entry
  pub keywords: Option<String>,
}

/// Text of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
  /// 1-based page number
  pub page_number: u32,
  /// Page text, every whitespace run collapsed to one space
  pub text:        String,
}

/// Extracts text from PDF bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
  /// Creates an extractor.
  pub fn new() -> Self { Self }

  /// Produces the page-segmented transcript of a PDF.
  ///
  /// Each page contributes `\n--- Page N ---\n<text>\n`, starting at page 1.
  ///
  /// # Errors
  ///
  /// [`PapernoteError::Extraction`] for anything `lopdf` cannot decode.
  pub fn extract_text(&self, bytes: &[u8]) -> Result<String> {
    Ok(
      self
        .extract_pages(bytes)?
        .iter()
        .map(|page| format!("\n--- Page {} ---\n{}\n", page.page_number, page.text))
        .collect(),
    )
  }

  /// Extracts each page's text.
  pub fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>> {
    let doc = lopdf::Document::load_mem(bytes)?;
    pages(&doc)
  }

  /// Extracts pages together with the document information dictionary.
  pub fn analyze(&self, bytes: &[u8]) -> Result<PdfContent> {
    let doc = lopdf::Document::load_mem(bytes)?;
    Ok(PdfContent { metadata: self.extract_metadata(&doc), pages: pages(&doc)? })
  }

  /// Reads title, author, subject and keywords from the trailer's `Info` entry.
  pub fn extract_metadata(&self, doc: &lopdf::Document) -> PdfMetadata {
    let info = doc
      .trailer
      .get(b"Info")
      .and_then(|object| object.as_reference())
      .and_then(|reference| doc.get_object(reference))
      .and_then(|object| object.as_dict());

    match info {
      Ok(info) => PdfMetadata {
        title:    text_from_dict(info, "Title"),
        author:   text_from_dict(info, "Author"),
        subject:  text_from_dict(info, "Subject"),
        keywords: text_from_dict(info, "Keywords"),
      },
      Err(e) => {
        trace!("No PDF info dictionary: {e}");
        PdfMetadata::default()
      },
    }
  }
}

/// Extracts every page of a loaded document in page order.
fn pages(doc: &lopdf::Document) -> Result<Vec<PageContent>> {
  doc
    .get_pages()
    .into_keys()
    .map(|page_number| -> Result<PageContent> {
      let raw = doc.extract_text(&[page_number])?;
      let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
      trace!("Page {page_number}: {} characters", text.len());
      Ok(PageContent { page_number, text })
    })
    .collect()
}

/// Decodes a string entry, honouring a UTF-16BE byte order mark.
fn text_from_dict(dict: &Dictionary, key: &str) -> Option<String> {
  dict.get(key.as_bytes()).ok().and_then(|object| object.as_str().ok()).map(|bytes| {
    match bytes.strip_prefix(&[0xFE, 0xFF]) {
      Some(utf16) => encoding_rs::UTF_16BE.decode(utf16).0.into_owned(),
      None => String::from_utf8_lossy(bytes).into_owned(),
    }
  })
}
