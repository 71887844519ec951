use papernote::{
  document::Document,
  related::{CITED_BY_HEADING, CITING_HEADING, NO_INFORMATION},
};
use serde_yaml::Value;

use super::*;

#[traced_test]
#[tokio::test]
async fn test_pdf_link_with_citation_outage() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_arxiv_feed(&server).await;
  Mock::given(method("GET"))
    .and(path(format!("/v1/paper/arXiv:{ARXIV_ID}")))
    .respond_with(ResponseTemplate::new(500))
    .expect(1)
    .mount(&server)
    .await;

  let url = ArxivUrl::parse("https://arxiv.org/pdf/1706.03762.pdf")?;
  assert_eq!(url.as_str(), "https://arxiv.org/abs/1706.03762");

  let (papernote, _dir) = create_test_papernote(&mock_settings(&server));
  let metadata = papernote.fetch_metadata(&url).await?;

  assert_eq!(metadata.title, "Attention Is All You Need");
  assert_eq!(metadata.publish_date, "2017-06-12");
  assert_eq!(metadata.authors, "Ashish Vaswani, Noam Shazeer");
  assert_eq!(metadata.num_cited_by, 0);
  assert!(metadata.influential_citations.is_empty());
  assert!(metadata.influential_references.is_empty());
  assert!(logs_contain("continuing without citations"));
  Ok(())
}

#[tokio::test]
async fn test_arxiv_failure_is_remote_fetch() -> TestResult<()> {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/query"))
    .respond_with(ResponseTemplate::new(503))
    .mount(&server)
    .await;

  let (papernote, _dir) = create_test_papernote(&mock_settings(&server));
  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  let err = papernote.fetch_metadata(&url).await.unwrap_err();
  assert!(matches!(err, PapernoteError::RemoteFetch(_)));
  Ok(())
}

#[tokio::test]
async fn test_metadata_into_new_note_with_inline_related() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_arxiv_feed(&server).await;
  Mock::given(method("GET"))
    .and(path(format!("/v1/paper/arXiv:{ARXIV_ID}")))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "numCitedBy": 90000,
      "numCiting": 42,
      "citations": [
        { "isInfluential": true, "paperId": "bert", "title": "BERT: Pre-training", "year": 2019 },
        { "isInfluential": false, "paperId": "minor", "title": "Minor Mention" }
      ],
      "references": []
    })))
    .mount(&server)
    .await;

  let (papernote, dir) = create_test_papernote(&mock_settings(&server));
  let url = ArxivUrl::parse("http://arxiv.org/abs/1706.03762")?;

  let (note, created) = papernote.ensure_note(None).await?;
  assert!(created);
  let metadata = papernote.fetch_metadata(&url).await?;
  let report = papernote.insert_metadata(&note, &metadata).await?;
  assert!(report.renamed);
  assert!(report.rename_error.is_none());
  assert_eq!(report.note, dir.path().join("Attention Is All You Need.md"));

  papernote.insert_related_papers(&report.note, &metadata, RelatedPaperMode::Inline).await?;

  let content = std::fs::read_to_string(&report.note)?;
  assert!(content.starts_with("---\ntitle: Attention Is All You Need\n"));
  assert!(content.contains("num_cited_by: 90000"));
  assert!(content.contains("checked: false"));
  assert!(content.contains("\n---\n## Abstract\nThe dominant sequence transduction models"));
  assert!(content.contains(&format!("{CITED_BY_HEADING}\n\n- BERT: Pre-training\n")));
  assert!(content.ends_with(&format!("{CITING_HEADING}\n\n{NO_INFORMATION}\n")));
  assert!(!content.contains("Minor Mention"));
  Ok(())
}

#[tokio::test]
async fn test_refetch_preserves_review_state() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_arxiv_feed(&server).await;
  Mock::given(method("GET"))
    .and(path(format!("/v1/paper/arXiv:{ARXIV_ID}")))
    .respond_with(ResponseTemplate::new(404))
    .mount(&server)
    .await;

  let (papernote, dir) = create_test_papernote(&mock_settings(&server));
  let note = dir.path().join("Attention Is All You Need.md");
  std::fs::write(
    &note,
    "---\nchecked: true\nrating: 5\ntags:\n- transformers\nfoo: bar\n---\n## Abstract\nMine\n\n## \
     Thoughts\nGreat paper.",
  )?;

  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  let metadata = papernote.fetch_metadata(&url).await?;
  let report = papernote.insert_metadata(&note, &metadata).await?;
  assert!(!report.renamed);
  assert!(report.rename_error.is_none());

  let content = std::fs::read_to_string(&note)?;
  assert!(content.contains("checked: true"));
  assert!(content.contains("rating: 5"));
  assert!(content.contains("- transformers"));
  assert!(content.contains("foo: bar"));
  assert!(content.contains("## Abstract\nMine\n"));
  assert!(!content.contains("The dominant sequence"));
  assert!(content.ends_with("## Thoughts\nGreat paper."));
  Ok(())
}

#[tokio::test]
async fn test_related_sibling_notes() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_arxiv_feed(&server).await;
  Mock::given(method("GET"))
    .and(path(format!("/v1/paper/arXiv:{ARXIV_ID}")))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "numCitedBy": 3,
      "numCiting": 2,
      "citations": [],
      "references": [{
        "isInfluential": true,
        "paperId": "lstm",
        "title": "Long Short-Term Memory",
        "venue": "Neural Computation",
        "year": 1997,
        "authors": [{ "name": "Sepp Hochreiter" }, { "name": "Juergen Schmidhuber" }],
        "citationCount": 50000,
        "intent": ["background"]
      }]
    })))
    .mount(&server)
    .await;

  let (papernote, dir) = create_test_papernote(&mock_settings(&server));
  std::fs::create_dir(dir.path().join("papers"))?;
  let note = dir.path().join("papers").join("draft.md");
  std::fs::write(&note, "")?;

  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  let metadata = papernote.fetch_metadata(&url).await?;
  let report = papernote.insert_metadata(&note, &metadata).await?;
  papernote.insert_related_papers(&report.note, &metadata, RelatedPaperMode::CreateNotes).await?;

  let content = std::fs::read_to_string(&report.note)?;
  assert!(content.contains(&format!("{CITED_BY_HEADING}\n\n{NO_INFORMATION}\n")));
  assert!(content.contains(&format!("{CITING_HEADING}\n\n- [[Long Short-Term Memory]]\n")));

  let sibling =
    std::fs::read_to_string(dir.path().join("papers").join("Long Short-Term Memory.md"))?;
  assert!(sibling.starts_with("---\ntitle: Long Short-Term Memory\n"));
  assert!(sibling.ends_with("---"));

  let sibling = Document::parse(&sibling)?;
  let frontmatter = sibling.frontmatter().unwrap();
  let field = |key: &str| frontmatter.get(key).cloned().unwrap_or(Value::Null);
  assert_eq!(field("authors"), Value::String("Sepp Hochreiter, Juergen Schmidhuber".into()));
  assert_eq!(field("year"), Value::Number(1997_u64.into()));
  assert_eq!(field("venue"), Value::String("Neural Computation".into()));
  assert_eq!(field("paper_link"), Value::String(String::new()));
  assert_eq!(field("semanticscholar_link"), Value::String("#".into()));
  assert_eq!(field("citations"), Value::Number(50000_u64.into()));
  assert_eq!(field("intent"), Value::Sequence(vec![Value::String("background".into())]));
  assert_eq!(sibling.body(), "");
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_related_sections_follow_failed_rename() -> TestResult<()> {
  let server = MockServer::start().await;
  mount_arxiv_feed(&server).await;
  Mock::given(method("GET"))
    .and(path(format!("/v1/paper/arXiv:{ARXIV_ID}")))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "numCitedBy": 1,
      "numCiting": 1,
      "citations": [{ "isInfluential": true, "paperId": "gpt", "title": "Language Models" }],
      "references": [
        { "isInfluential": true, "paperId": "lstm", "title": "Long Short-Term Memory" }
      ]
    })))
    .mount(&server)
    .await;

  let (papernote, dir) = create_test_papernote(&mock_settings(&server));
  let note = dir.path().join("draft.md");
  let taken = dir.path().join("Attention Is All You Need.md");
  std::fs::write(&note, "My notes")?;
  std::fs::write(&taken, "someone else's note")?;

  let url = ArxivUrl::parse("https://arxiv.org/abs/1706.03762")?;
  let metadata = papernote.fetch_metadata(&url).await?;
  let report = papernote.insert_metadata(&note, &metadata).await?;
  assert!(!report.renamed);
  assert!(matches!(report.rename_error, Some(PapernoteError::DuplicateFile(_))));
  assert_eq!(report.note, note);

  papernote.insert_related_papers(&report.note, &metadata, RelatedPaperMode::Inline).await?;

  let content = std::fs::read_to_string(&note)?;
  assert!(content.contains("title: Attention Is All You Need"));
  assert!(content.contains("My notes\n\n## Abstract\n"));
  assert!(content.contains(&format!("{CITED_BY_HEADING}\n\n- Language Models\n")));
  assert!(content.contains(&format!("{CITING_HEADING}\n\n- Long Short-Term Memory\n")));
  assert_eq!(std::fs::read_to_string(&taken)?, "someone else's note");
  assert!(logs_contain("Could not rename"));
  Ok(())
}
