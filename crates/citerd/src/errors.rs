//! Error types for the citerd server and CLI.
//!
//! Errors are transparent wrappers so the underlying message reaches the log unchanged. On the
//! HTTP side every one of them becomes a `500 Internal Server Error`; a paper that does not
//! exist is handled by the routes themselves and never turns into a [`CiterdError`].

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use super::*;

/// Errors that can occur while serving pages or running CLI commands.
#[derive(Error, Debug)]
pub enum CiterdError {
  /// Errors from the underlying citer library
  #[error(transparent)]
  Citer(#[from] CiterError),

  /// Template lookup or rendering errors
  #[error(transparent)]
  Template(#[from] minijinja::Error),

  /// Socket and terminal IO errors
  #[error(transparent)]
  IO(#[from] std::io::Error),

  /// JSON encoding errors for `cite --json`
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The `cite` command found no paper for the identifier
  #[error("Paper not found: {0}")]
  PaperNotFound(String),
}

impl IntoResponse for CiterdError {
  fn into_response(self) -> Response {
    error!("Request failed: {self}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
  }
}
