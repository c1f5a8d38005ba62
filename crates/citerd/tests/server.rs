//! Router tests for the citerd web front end.
//!
//! The arXiv API is mocked with wiremock and the router is driven in-process with
//! `tower::ServiceExt::oneshot`, so no socket is bound.

use axum::{
  body::Body,
  http::{header, Request, StatusCode},
  Router,
};
use citerd::{server, ServerConfig};
use citer::{InitialsStyle, StyleSet};
use tower::ServiceExt;
use tracing_test::traced_test;
use wiremock::{
  matchers::{method, path, query_param},
  Mock, MockServer, ResponseTemplate,
};

const EXAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: id_list=2301.00001</title>
  <entry>
    <id>http://arxiv.org/abs/2301.00001v1</id>
    <published>2023-01-02T10:00:00Z</published>
    <title>Example Paper</title>
    <summary>An example.</summary>
    <author><name>Alice Smith</name></author>
    <author><name>Bob Jones</name></author>
    <link href="http://arxiv.org/abs/2301.00001v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="https://arxiv.org/pdf/2301.00001" rel="related" type="application/pdf"/>
  </entry>
</feed>"#;

const EMPTY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: id_list=9999.99999</title>
</feed>"#;

const EMPTY_ENTRY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry></entry>
</feed>"#;

const PARTIAL_ENTRY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/2301.00405</id>
  </entry>
</feed>"#;

async fn mock_arxiv() -> MockServer {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("id_list", "2301.00001"))
    .respond_with(ResponseTemplate::new(200).set_body_string(EXAMPLE_FEED))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("id_list", "9999.99999"))
    .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_FEED))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("id_list", "2301.00404"))
    .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_ENTRY_FEED))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("id_list", "2301.00405"))
    .respond_with(ResponseTemplate::new(200).set_body_string(PARTIAL_ENTRY_FEED))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/query"))
    .and(query_param("id_list", "2301.00666"))
    .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
    .mount(&server)
    .await;
  server
}

fn app(mock: &MockServer) -> Router {
  server::router(&ServerConfig::for_testing(&mock.uri())).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
  let response = app.oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_page() {
  let mock = mock_arxiv().await;

  let (status, body) = get(app(&mock), "/").await;

  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("arXiv Citation Helper"));
  assert!(body.contains("name=\"id\""));
}

#[traced_test]
#[tokio::test]
async fn test_paper_page() {
  let mock = mock_arxiv().await;

  let (status, body) = get(app(&mock), "/abs/2301.00001").await;

  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("Example Paper"));
  assert!(body.contains("Alice Smith, Bob Jones"));
  assert!(body.contains("2023"));
  assert!(body.contains("author  = {Alice Smith and Bob Jones}"));
  assert!(body.contains("A. Smith, and B. Jones"));
  assert!(body.contains("A. Smith, &amp; B. Jones (2023). Example Paper. arXiv:2301.00001."));
  assert!(body.contains("citation-bibtex"));
  assert!(body.contains("citation-ieee"));
  assert!(body.contains("citation-apa"));
  assert!(!body.contains("citation-pubmed"));
  assert!(body.contains("scholar?q=Example%20Paper"));
}

#[tokio::test]
async fn test_pdf_and_abs_routes_match() {
  let mock = mock_arxiv().await;

  let (abs_status, abs_body) = get(app(&mock), "/abs/2301.00001").await;
  let (pdf_status, pdf_body) = get(app(&mock), "/pdf/2301.00001").await;

  assert_eq!(abs_status, StatusCode::OK);
  assert_eq!(pdf_status, abs_status);
  assert_eq!(pdf_body, abs_body);
}

#[traced_test]
#[tokio::test]
async fn test_unknown_paper_is_not_found() {
  let mock = mock_arxiv().await;

  for uri in ["/abs/9999.99999", "/pdf/9999.99999"] {
    let (status, body) = get(app(&mock), uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Paper not found.");
  }
}

#[traced_test]
#[tokio::test]
async fn test_empty_or_partial_entry_is_not_found() {
  let mock = mock_arxiv().await;

  for uri in ["/abs/2301.00404", "/pdf/2301.00405"] {
    let (status, body) = get(app(&mock), uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    assert_eq!(body, "Paper not found.");
  }
}

#[traced_test]
#[tokio::test]
async fn test_upstream_failure_is_server_error() {
  let mock = mock_arxiv().await;

  let (status, _) = get(app(&mock), "/abs/2301.00666").await;

  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_legacy_styles() {
  let mock = mock_arxiv().await;
  let config = ServerConfig {
    initials: InitialsStyle::Compact,
    styles: StyleSet::Legacy,
    ..ServerConfig::for_testing(&mock.uri())
  };

  let (status, body) = get(server::router(&config).unwrap(), "/abs/2301.00001").await;

  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("citation-pubmed"));
  assert!(!body.contains("citation-apa"));
  assert!(body.contains("Alice Smith et al."));
  assert!(body.contains("Alice Smith, Bob Jones. Example Paper. arXiv; 2023."));
}

#[tokio::test]
async fn test_lookup_redirects() {
  let mock = mock_arxiv().await;

  let response = app(&mock)
    .oneshot(
      Request::get("/lookup?id=https%3A%2F%2Farxiv.org%2Fabs%2F2301.00001")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  assert_eq!(response.headers()[header::LOCATION], "/abs/2301.00001");

  let response = app(&mock)
    .oneshot(Request::get("/lookup?id=nonsense").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  assert_eq!(response.headers()[header::LOCATION], "/");

  let response =
    app(&mock).oneshot(Request::get("/lookup").body(Body::empty()).unwrap()).await.unwrap();
  assert_eq!(response.headers()[header::LOCATION], "/");
}
