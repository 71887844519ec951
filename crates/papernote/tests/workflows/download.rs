use super::*;

#[tokio::test]
async fn test_download_into_configured_folder() -> TestResult<()> {
  let server = MockServer::start().await;
  let bytes = sample_pdf(&["Page one"]);
  Mock::given(method("GET"))
    .and(path(format!("/pdf/{ARXIV_ID}.pdf")))
    .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let settings = Settings { download_path: "papers/pdfs".into(), ..mock_settings(&server) };
  let (papernote, dir) = create_test_papernote(&settings);

  let url = ArxivUrl::parse("https://arxiv.org/pdf/1706.03762.pdf")?;
  let saved = papernote.download_pdf(&url).await?;
  assert_eq!(saved, dir.path().join("papers").join("pdfs").join("1706.03762.pdf"));
  assert_eq!(std::fs::read(&saved)?, bytes);

  let (note, created) = papernote.extract_pdf_to_note(&saved).await?;
  assert!(created);
  assert_eq!(note, dir.path().join("papers").join("pdfs").join("1706.03762-extracted.md"));
  assert_eq!(std::fs::read_to_string(&note)?, "\n--- Page 1 ---\nPage one\n");
  Ok(())
}

#[tokio::test]
async fn test_download_failure_status() -> TestResult<()> {
  let server = MockServer::start().await;
  Mock::given(method("GET")).respond_with(ResponseTemplate::new(404)).mount(&server).await;

  let settings = Settings { download_path: "pdfs".into(), ..mock_settings(&server) };
  let (papernote, dir) = create_test_papernote(&settings);

  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  let err = papernote.download_pdf(&url).await.unwrap_err();
  assert!(matches!(err, PapernoteError::RemoteFetch(ref message) if message.contains("404")));
  assert!(!dir.path().join("pdfs").exists());
  Ok(())
}

#[tokio::test]
async fn test_extract_overwrites_previous_transcript() -> TestResult<()> {
  let (papernote, dir) = create_test_papernote(&Settings::default());
  let pdf = dir.path().join("2404.16260v1.pdf");
  std::fs::write(&pdf, sample_pdf(&["Fresh text"]))?;
  std::fs::write(dir.path().join("2404.16260v1-extracted.md"), "stale")?;

  let (note, created) = papernote.extract_pdf_to_note(Path::new("2404.16260v1.pdf")).await?;
  assert!(!created);
  assert_eq!(std::fs::read_to_string(note)?, "\n--- Page 1 ---\nFresh text\n");
  Ok(())
}
