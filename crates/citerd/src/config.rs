//! Server configuration.
//!
//! A [`ServerConfig`] is built once at startup (from command-line flags) and handed to
//! [`crate::server::router`]; nothing reads configuration from anywhere else afterwards.

use super::*;

/// Address the server listens on unless told otherwise.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 5001;

/// Search engine query prefix; the percent-encoded paper title is appended.
pub const SCHOLAR_SEARCH_URL: &str = "https://scholar.google.com/scholar?q=";

/// Everything the web server needs to know at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
  /// Interface to bind
  pub host:       String,
  /// Port to bind
  pub port:       u16,
  /// Base URL of the arXiv API (overridable for mock servers)
  pub api_url:    String,
  /// Initials rule for the citation styles that abbreviate names
  pub initials:   InitialsStyle,
  /// Which citation styles to show
  pub styles:     StyleSet,
  /// Search engine query prefix for the "search for this paper" link
  pub search_url: String,
}

impl ServerConfig {
  /// A configuration pointing at a mock arXiv API, for tests.
  pub fn for_testing(api_url: &str) -> Self {
    Self { host: "127.0.0.1".to_string(), port: 0, api_url: api_url.to_string(), ..Self::default() }
  }

  /// The `host:port` string to bind.
  pub fn addr(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// An arXiv client for the configured API.
  pub fn client(&self) -> ArxivClient { ArxivClient::with_api_url(&self.api_url) }

  /// A citation formatter with the configured initials rule and style set.
  pub fn formatter(&self) -> CitationFormatter { CitationFormatter::new(self.initials, self.styles) }
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       DEFAULT_HOST.to_string(),
      port:       DEFAULT_PORT,
      api_url:    citer::clients::arxiv::ARXIV_API_URL.to_string(),
      initials:   InitialsStyle::default(),
      styles:     StyleSet::default(),
      search_url: SCHOLAR_SEARCH_URL.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_default() {
    let config = ServerConfig::default();
    assert_eq!(config.addr(), "0.0.0.0:5001");
    assert_eq!(config.client().api_url(), "http://export.arxiv.org/api");
    assert_eq!(config.formatter(), CitationFormatter::default());
  }

  #[test]
  fn test_config_for_testing() {
    let config = ServerConfig::for_testing("http://127.0.0.1:4321");
    assert_eq!(config.addr(), "127.0.0.1:0");
    assert_eq!(config.client().api_url(), "http://127.0.0.1:4321");
    assert_eq!(config.search_url, SCHOLAR_SEARCH_URL);
  }
}
