//! Client for the Gemini `generateContent` endpoint.
//!
//! Requests are built fluently and sent as a single, non-streaming call. The
//! answer is the first candidate's first text part, returned verbatim.
//!
//! # Examples
//!
//! ```no_run
//! use papernote::llm::GeminiRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let answer = GeminiRequest::new()
//!   .with_model("gemini-1.5-flash-latest")
//!   .with_api_key("my-key")
//!   .with_text("Summarize: attention is all you need.")
//!   .send()
//!   .await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

use super::*;

/// Default base of the Gemini API.
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Request builder for Gemini text generation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeminiRequest {
  /// Prompt parts, sent in order
  pub contents: Vec<Content>,

  /// API base. Falls back to [`DEFAULT_GEMINI_API_URL`] with a warning.
  #[serde(skip)]
  pub base_url: Option<String>,

  /// Model name. Falls back to [`DEFAULT_MODEL`] with a warning.
  #[serde(skip)]
  pub model: Option<String>,

  /// Key sent as the `key` query parameter. Required.
  #[serde(skip)]
  pub api_key: Option<String>,
}

/// A conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
  /// Text parts of the turn
  #[serde(default)]
  pub parts: Vec<Part>,
}

/// One text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
  /// The text
  #[serde(default)]
  pub text: String,
}

/// Body of a `generateContent` response.
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
  /// Generated candidates, best first
  #[serde(default)]
  pub candidates: Vec<Candidate>,
}

/// One generated candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
  /// The generated turn
  pub content: Option<Content>,
}

impl GeminiResponse {
  /// Text of the first part of the first candidate.
  pub fn text(&self) -> Option<&str> {
    self
      .candidates
      .first()
      .and_then(|candidate| candidate.content.as_ref())
      .and_then(|content| content.parts.first())
      .map(|part| part.text.as_str())
  }
}

impl GeminiRequest {
  /// Creates an empty request.
  pub fn new() -> Self { Self::default() }

  /// Sets the API base, e.g. a mock server in tests.
  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = Some(base_url.trim_end_matches('/').to_string());
    self
  }

  /// Sets the model name.
  pub fn with_model(mut self, model: &str) -> Self {
    self.model.replace(model.to_string());
    self
  }

  /// Sets the API key.
  pub fn with_api_key(mut self, api_key: &str) -> Self {
    self.api_key.replace(api_key.to_string());
    self
  }

  /// Adds a text part to the request.
  pub fn with_text(mut self, text: &str) -> Self {
    self.contents.push(Content { parts: vec![Part { text: text.to_string() }] });
    self
  }

  /// The `generateContent` URL for the configured base and model.
  pub fn endpoint(&self) -> String {
    let base = self.base_url.as_deref().unwrap_or_else(|| {
      warn!("No Gemini base URL set, using {DEFAULT_GEMINI_API_URL}");
      DEFAULT_GEMINI_API_URL
    });
    let model = self.model.as_deref().unwrap_or_else(|| {
      warn!("No Gemini model set, using {DEFAULT_MODEL}");
      DEFAULT_MODEL
    });
    format!("{base}/models/{model}:generateContent")
  }

  /// Sends the request and returns the generated text.
  ///
  /// # Errors
  ///
  /// - [`PapernoteError::Config`] if no API key is set
  /// - [`PapernoteError::RemoteFetch`] on a non-success status or a response without text
  pub async fn send(&self) -> Result<String> {
    let api_key = self
      .api_key
      .as_deref()
      .filter(|key| !key.trim().is_empty())
      .ok_or_else(|| PapernoteError::Config("Gemini API key is not configured".to_string()))?;

    let endpoint = self.endpoint();
    debug!("Sending {} prompt part(s) to {endpoint}", self.contents.len());

    let response = reqwest::Client::new()
      .post(&endpoint)
      .query(&[("key", api_key)])
      .json(self)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      trace!("Gemini error body: {body}");
      return Err(PapernoteError::RemoteFetch(format!("Gemini request failed: {status}")));
    }

    let answer: GeminiResponse = response.json().await?;
    answer
      .text()
      .map(str::to_string)
      .ok_or_else(|| PapernoteError::RemoteFetch("Gemini response contained no text".to_string()))
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_request_body() {
    let request = GeminiRequest::new().with_api_key("secret").with_text("Hello");
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body, json!({ "contents": [{ "parts": [{ "text": "Hello" }] }] }));
  }

  #[test]
  fn test_endpoint() {
    let request = GeminiRequest::new().with_base_url("http://localhost:8080/v1beta/").with_model("m");
    assert_eq!(request.endpoint(), "http://localhost:8080/v1beta/models/m:generateContent");
  }

  #[traced_test]
  #[test]
  fn test_warnings() {
    let endpoint = GeminiRequest::new().endpoint();
    assert_eq!(
      endpoint,
      "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent"
    );
    assert!(logs_contain("No Gemini base URL set"));
    assert!(logs_contain("No Gemini model set"));
  }

  #[test]
  fn test_response_text() {
    let response: GeminiResponse = serde_json::from_value(json!({
      "candidates": [
        { "content": { "parts": [{ "text": "First" }, { "text": "Second" }], "role": "model" } },
        { "content": { "parts": [{ "text": "Other candidate" }] } }
      ]
    }))
    .unwrap();
    assert_eq!(response.text(), Some("First"));

    let empty: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
    assert_eq!(empty.text(), None);
  }

  #[tokio::test]
  async fn test_missing_key() {
    let err = GeminiRequest::new().with_text("Hello").send().await.unwrap_err();
    assert!(matches!(err, PapernoteError::Config(_)));
  }
}
