//! The HTTP front end.
//!
//! Routes:
//! - `GET /` renders the landing page
//! - `GET /abs/{id}` and `GET /pdf/{id}` look the paper up and render its citation page, or
//!   answer `404 Paper not found.`
//! - `GET /lookup?id=...` is the landing-page form target; it normalizes whatever was typed
//!   (identifier or arxiv.org URL) and redirects to `/abs/{id}`
//!
//! Handlers share an [`AppState`] built once from the [`ServerConfig`]; it is never mutated.

use std::sync::Arc;

use axum::{
  extract::{Path, Query, State},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
  routing::get,
  Router,
};
use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use super::*;

/// Plain-text body of the not-found response.
pub const NOT_FOUND_BODY: &str = "Paper not found.";

/// Read-only state shared by all handlers.
pub struct AppState {
  /// Fetcher for paper metadata
  client:     ArxivClient,
  /// Citation renderer
  formatter:  CitationFormatter,
  /// Compiled page templates
  templates:  Environment<'static>,
  /// Search engine query prefix
  search_url: String,
}

impl AppState {
  /// Builds the handler state from the startup configuration.
  pub fn new(config: &ServerConfig) -> Result<Self, CiterdError> {
    Ok(Self {
      client:     config.client(),
      formatter:  config.formatter(),
      templates:  templates()?,
      search_url: config.search_url.clone(),
    })
  }
}

/// One citation as the paper template displays it.
#[derive(Debug, Serialize)]
struct CitationView<'a> {
  /// Lowercase style key, used for element ids
  key:   &'static str,
  /// Heading for the citation block
  label: &'static str,
  /// The formatted citation
  text:  &'a str,
}

/// Query string of the landing-page form.
#[derive(Debug, Deserialize)]
struct LookupQuery {
  /// Whatever the user typed
  id: Option<String>,
}

/// Compiles the page templates embedded in the binary.
///
/// HTML auto-escaping is on for both templates (minijinja enables it for `.html` names).
pub fn templates() -> Result<Environment<'static>, CiterdError> {
  let mut env = Environment::new();
  env.add_template("index.html", include_str!("../templates/index.html"))?;
  env.add_template("paper.html", include_str!("../templates/paper.html"))?;
  Ok(env)
}

/// Builds the application router from the startup configuration.
pub fn router(config: &ServerConfig) -> Result<Router, CiterdError> {
  let state = Arc::new(AppState::new(config)?);

  Ok(
    Router::new()
      .route("/", get(index))
      .route("/lookup", get(lookup))
      .route("/pdf/{*id}", get(show_citation))
      .route("/abs/{*id}", get(show_citation))
      .layer(TraceLayer::new_for_http())
      .with_state(state),
  )
}

/// Binds the configured address and serves until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<(), CiterdError> {
  let app = router(&config)?;
  let listener = tokio::net::TcpListener::bind(config.addr()).await?;
  info!("Listening on http://{}", listener.local_addr()?);
  axum::serve(listener, app).await?;
  Ok(())
}

/// The search engine link for a paper title, with the title percent-encoded.
pub fn search_link(search_url: &str, title: &str) -> String {
  format!("{search_url}{}", urlencoding::encode(title))
}

/// `GET /`
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, CiterdError> {
  let page = state.templates.get_template("index.html")?.render(context! {})?;
  Ok(Html(page))
}

/// `GET /lookup?id=...`
async fn lookup(Query(query): Query<LookupQuery>) -> Redirect {
  let input = query.id.unwrap_or_default();
  match citer::identifier::normalize(&input) {
    Ok(id) => Redirect::to(&format!("/abs/{id}")),
    Err(e) => {
      debug!("Rejected lookup input {input:?}: {e}");
      Redirect::to("/")
    },
  }
}

/// `GET /abs/{id}` and `GET /pdf/{id}`
async fn show_citation(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Response, CiterdError> {
  let Some(paper) = state.client.fetch(&id).await? else {
    info!("No paper found for {id}");
    return Ok((StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response());
  };

  let page = render_paper(&state, &paper)?;
  Ok(Html(page).into_response())
}

/// Renders the paper page for a fetched record.
fn render_paper(state: &AppState, paper: &PaperRecord) -> Result<String, CiterdError> {
  let citations = state.formatter.citations(paper);
  let citations = citations
    .iter()
    .map(|(style, text)| CitationView { key: style.key(), label: style.label(), text })
    .collect::<Vec<_>>();

  let page = state.templates.get_template("paper.html")?.render(context! {
    paper => paper,
    citations => citations,
    search_url => search_link(&state.search_url, &paper.title),
  })?;
  Ok(page)
}
