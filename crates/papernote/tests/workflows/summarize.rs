use papernote::summary::{AI_DISCLAIMER, SUMMARY_HEADING};

use super::*;

async fn mount_pdf(server: &MockServer, bytes: Vec<u8>) {
  Mock::given(method("GET"))
    .and(path(format!("/pdf/{ARXIV_ID}.pdf")))
    .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes))
    .mount(server)
    .await;
}

#[tokio::test]
async fn test_summary_is_appended() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_pdf(&server, sample_pdf(&["Attention mechanisms", "Multi-head attention"])).await;
  Mock::given(method("POST"))
    .and(path("/v1beta/models/gemini-1.5-flash-latest:generateContent"))
    .and(query_param("key", "test-key"))
    .and(body_string_contains("Be concise.\\n\\nText to summarize: "))
    .and(body_string_contains("--- Page 2 ---\\nMulti-head attention"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "candidates": [{ "content": { "parts": [{ "text": "**Attention** replaces recurrence." }] } }]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let settings = Settings { api_key: "test-key".into(), ..mock_settings(&server) };
  let (papernote, dir) = create_test_papernote(&settings);
  let note = dir.path().join("paper.md");
  std::fs::write(&note, "## Abstract\nA")?;

  let url = ArxivUrl::parse("https://arxiv.org/pdf/1706.03762.pdf")?;
  let choice = PromptChoice::Custom("Be concise.".into());
  let summary = papernote.summarize(&note, &url, &choice).await?;
  assert_eq!(summary.as_deref(), Some("**Attention** replaces recurrence."));

  let content = std::fs::read_to_string(&note)?;
  assert_eq!(
    content,
    format!(
      "## Abstract\nA\n\n{SUMMARY_HEADING}\n\n**Attention** replaces recurrence.\n\n---\n{AI_DISCLAIMER}"
    )
  );
  Ok(())
}

#[tokio::test]
async fn test_translation_request() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_pdf(&server, sample_pdf(&["Text"])).await;
  Mock::given(method("POST"))
    .and(path("/v1beta/models/gemini-1.5-flash-latest:generateContent"))
    .and(body_string_contains("Write the entire answer in Chinese."))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "candidates": [{ "content": { "parts": [{ "text": "Summary" }] } }]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let mut settings = Settings { api_key: "test-key".into(), ..mock_settings(&server) };
  settings.set("translate_enabled", "true")?;
  settings.set("target_language", "chinese")?;
  let (papernote, dir) = create_test_papernote(&settings);
  let note = dir.path().join("paper.md");
  std::fs::write(&note, "")?;

  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  papernote.summarize(&note, &url, &PromptChoice::UseDefault).await?;
  Ok(())
}

#[tokio::test]
async fn test_gemini_error_leaves_note_untouched() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_pdf(&server, sample_pdf(&["Text"])).await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(429))
    .mount(&server)
    .await;

  let settings = Settings { api_key: "test-key".into(), ..mock_settings(&server) };
  let (papernote, dir) = create_test_papernote(&settings);
  let note = dir.path().join("paper.md");
  std::fs::write(&note, "Original")?;

  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  let err = papernote.summarize(&note, &url, &PromptChoice::UseDefault).await.unwrap_err();
  assert!(matches!(err, PapernoteError::RemoteFetch(_)));
  assert_eq!(std::fs::read_to_string(&note)?, "Original");
  Ok(())
}

#[tokio::test]
async fn test_cancel_sends_nothing() -> TestResult<()> {
  let server = MockServer::start().await;
  Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
  Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let settings = Settings { api_key: "test-key".into(), ..mock_settings(&server) };
  let (papernote, dir) = create_test_papernote(&settings);
  let note = dir.path().join("paper.md");
  std::fs::write(&note, "Original")?;

  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  assert_eq!(papernote.summarize(&note, &url, &PromptChoice::Cancel).await?, None);
  assert_eq!(std::fs::read_to_string(&note)?, "Original");
  Ok(())
}

#[tokio::test]
async fn test_corrupt_pdf_is_extraction_error() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_pdf(&server, b"<html>rate limited</html>".to_vec()).await;

  let settings = Settings { api_key: "test-key".into(), ..mock_settings(&server) };
  let (papernote, dir) = create_test_papernote(&settings);
  let note = dir.path().join("paper.md");
  std::fs::write(&note, "")?;

  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  let err = papernote.summarize(&note, &url, &PromptChoice::UseDefault).await.unwrap_err();
  assert!(matches!(err, PapernoteError::Extraction(_)));
  Ok(())
}
