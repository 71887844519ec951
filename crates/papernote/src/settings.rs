//! Persisted user settings.
//!
//! Settings live in a TOML file, by default
//! `<config dir>/papernote/settings.toml`. They are loaded once per command and
//! passed by reference to each component; a change is written back to disk
//! immediately. Values are only checked for presence where they are used.
//!
//! ```toml
//! api_key = "..."
//! download_path = "pdfs"
//! translate_enabled = true
//! target_language = "japanese"
//! ```

use super::*;

/// Language summaries are translated into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  /// Korean
  #[default]
  Korean,
  /// Japanese
  Japanese,
  /// Chinese
  Chinese,
}

impl Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Korean => write!(f, "korean"),
      Self::Japanese => write!(f, "japanese"),
      Self::Chinese => write!(f, "chinese"),
    }
  }
}

impl FromStr for Language {
  type Err = PapernoteError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "korean" | "ko" => Ok(Self::Korean),
      "japanese" | "ja" => Ok(Self::Japanese),
      "chinese" | "zh" => Ok(Self::Chinese),
      other => Err(PapernoteError::Config(format!("Unsupported target language: {other}"))),
    }
  }
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Gemini API key
  pub api_key:                  String,
  /// Folder PDFs are downloaded into, relative to the vault root
  pub download_path:            String,
  /// Folder for images, relative to the vault root
  pub image_path:               String,
  /// Whether summaries are requested in [`Settings::target_language`]
  pub translate_enabled:        bool,
  /// Language summaries are translated into
  pub target_language:          Language,
  /// Gemini model name
  pub gemini_model:             String,
  /// Base of the Gemini API
  pub gemini_api_url:           String,
  /// Base of the arXiv export API
  pub arxiv_api_url:            String,
  /// Base that PDFs are fetched from
  pub arxiv_pdf_url:            String,
  /// Base of the Semantic Scholar API
  pub semantic_scholar_api_url: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      api_key:                  String::new(),
      download_path:            String::new(),
      image_path:               String::new(),
      translate_enabled:        false,
      target_language:          Language::default(),
      gemini_model:             llm::DEFAULT_MODEL.to_string(),
      gemini_api_url:           llm::DEFAULT_GEMINI_API_URL.to_string(),
      arxiv_api_url:            DEFAULT_ARXIV_API_URL.to_string(),
      arxiv_pdf_url:            url::DEFAULT_PDF_URL.to_string(),
      semantic_scholar_api_url: DEFAULT_SEMANTIC_SCHOLAR_API_URL.to_string(),
    }
  }
}

impl Settings {
  /// `<config dir>/papernote/settings.toml`, or a relative `settings.toml`
  /// when the platform has no config directory.
  pub fn default_path() -> PathBuf {
    dirs::config_dir()
      .map(|dir| dir.join("papernote"))
      .unwrap_or_default()
      .join("settings.toml")
  }

  /// Loads settings from `path`, falling back to defaults when it does not exist.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No settings at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    let text = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
  }

  /// Writes settings to `path`, creating parent directories.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    debug!("Saved settings to {}", path.display());
    Ok(())
  }

  /// Sets one field from its string form.
  pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
    match key {
      "api_key" => self.api_key = value.to_string(),
      "download_path" => self.download_path = value.to_string(),
      "image_path" => self.image_path = value.to_string(),
      "translate_enabled" =>
        self.translate_enabled = value.parse().map_err(|_| {
          PapernoteError::Config(format!("translate_enabled expects true or false, got {value}"))
        })?,
      "target_language" => self.target_language = value.parse()?,
      "gemini_model" => self.gemini_model = value.to_string(),
      "gemini_api_url" => self.gemini_api_url = value.to_string(),
      "arxiv_api_url" => self.arxiv_api_url = value.to_string(),
      "arxiv_pdf_url" => self.arxiv_pdf_url = value.to_string(),
      "semantic_scholar_api_url" => self.semantic_scholar_api_url = value.to_string(),
      other => return Err(PapernoteError::Config(format!("Unknown setting: {other}"))),
    }
    Ok(())
  }

  /// The API key, or [`PapernoteError::Config`] when it is empty.
  pub fn require_api_key(&self) -> Result<&str> {
    require(&self.api_key, "Gemini API key is not configured")
  }

  /// The download folder, or [`PapernoteError::Config`] when it is empty.
  pub fn require_download_path(&self) -> Result<&str> {
    require(&self.download_path, "PDF download path is not configured")
  }

  /// Every setting as a key and display value, with the API key masked.
  pub fn entries(&self) -> Vec<(&'static str, String)> {
    let masked = if self.api_key.is_empty() { String::new() } else { "********".to_string() };
    vec![
      ("api_key", masked),
      ("download_path", self.download_path.clone()),
      ("image_path", self.image_path.clone()),
      ("translate_enabled", self.translate_enabled.to_string()),
      ("target_language", self.target_language.to_string()),
      ("gemini_model", self.gemini_model.clone()),
      ("gemini_api_url", self.gemini_api_url.clone()),
      ("arxiv_api_url", self.arxiv_api_url.clone()),
      ("arxiv_pdf_url", self.arxiv_pdf_url.clone()),
      ("semantic_scholar_api_url", self.semantic_scholar_api_url.clone()),
    ]
  }
}

/// Returns `value` when it is not blank.
fn require<'a>(value: &'a str, message: &str) -> Result<&'a str> {
  let value = value.trim();
  if value.is_empty() {
    Err(PapernoteError::Config(message.to_string()))
  } else {
    Ok(value)
  }
}
