//! Client implementation for fetching papers from arXiv.org.
//!
//! The client uses arXiv's Atom feed API (http://export.arxiv.org/api/query) restricted to a
//! single identifier and keeps only the first entry of the answer. Identifiers are passed through
//! untouched (percent-encoded into the query string), so both new-style (2301.07041) and
//! old-style (math.AG/0601001) identifiers work, as does anything else arXiv happens to accept.
//!
//! # Examples
//!
//! ```no_run
//! use citer::clients::ArxivClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new();
//! match client.fetch("2301.07041").await? {
//!   Some(paper) => println!("{} has {} authors", paper.title, paper.authors.len()),
//!   None => println!("Paper not found."),
//! }
//! # Ok(())
//! # }
//! ```

use url::Url;

use super::*;

/// Base URL of the public arXiv API.
pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api";

/// Internal representation of the arXiv API's Atom feed response.
#[derive(Debug, Deserialize)]
struct Feed {
  /// A `Feed` from arXiv may contain zero or more `Entry`s
  #[serde(rename = "entry", default)]
  entries: Vec<Entry>,
}

/// Internal representation of a paper entry from arXiv's API response.
///
/// Only the fields needed for citations are captured. Everything is optional at this level so
/// that arXiv's error entries and partial entries still deserialize; those are skipped rather
/// than turned into records.
#[derive(Debug, Deserialize)]
struct Entry {
  /// arXiv URL (e.g., "http://arxiv.org/abs/2301.07041v1"), or an `api/errors` URL
  #[serde(rename = "id")]
  arxiv_url: Option<String>,
  /// Paper title (may be wrapped over several lines)
  title:     Option<String>,
  /// List of paper authors
  #[serde(rename = "author", default)]
  authors:   Vec<Author>,
  /// Publication date of the first version
  published: Option<DateTime<Utc>>,
  /// Alternate and related links, one of which points at the PDF
  #[serde(rename = "link", default)]
  links:     Vec<Link>,
}

/// Internal representation of an author from arXiv's API response.
#[derive(Debug, Deserialize)]
struct Author {
  /// Author's full name
  name: String,
}

/// Internal representation of an Atom `<link>` element.
#[derive(Debug, Deserialize)]
struct Link {
  /// Target of the link
  #[serde(rename = "@href")]
  href:  String,
  /// arXiv marks the PDF link with `title="pdf"`
  #[serde(rename = "@title", default)]
  title: Option<String>,
}

impl Entry {
  /// arXiv reports some failures (e.g. malformed identifiers) as a pseudo-entry whose id points
  /// at its error documentation rather than at a paper.
  fn is_error(arxiv_url: &str) -> bool { arxiv_url.contains("/api/errors") }

  /// The PDF link if arXiv supplied one, otherwise derived from the abstract URL.
  fn pdf_url(&self, arxiv_url: &str) -> String {
    self
      .links
      .iter()
      .find(|link| link.title.as_deref() == Some("pdf"))
      .map(|link| link.href.clone())
      .unwrap_or_else(|| arxiv_url.replace("/abs/", "/pdf/"))
  }

  /// Converts the raw entry into a [`PaperRecord`] keyed by the caller's identifier.
  ///
  /// Returns `None` for error entries and for entries missing an id, a title or a publication
  /// date: none of those describe a paper that can be cited.
  fn into_record(self, identifier: &str) -> Option<PaperRecord> {
    let Some(arxiv_url) = self.arxiv_url.as_deref().filter(|url| !Self::is_error(url)) else {
      debug!("Skipping arXiv entry without a paper id: {:?}", self.arxiv_url);
      return None;
    };
    let pdf_url = self.pdf_url(arxiv_url);
    let title = self
      .title
      .as_deref()
      .map(paper::collapse_whitespace)
      .filter(|title| !title.is_empty());
    let (Some(title), Some(published)) = (title, self.published) else {
      debug!("Skipping incomplete arXiv entry: {arxiv_url}");
      return None;
    };

    Some(PaperRecord {
      identifier: identifier.to_string(),
      title,
      authors: self.authors.into_iter().map(|author| author.name.trim().to_string()).collect(),
      year: published.year(),
      pdf_url,
    })
  }
}

/// Client for interacting with the arXiv API.
///
/// The client holds a reusable HTTP connection pool and the base URL of the API, which can be
/// pointed elsewhere (for instance at a mock server) with [`ArxivClient::with_api_url`].
///
/// # Examples
///
/// ```no_run
/// # use citer::clients::arxiv::ArxivClient;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ArxivClient::new();
///
/// // Fetch using new-style ID
/// let paper1 = client.fetch("2301.07041").await?;
///
/// // Fetch using old-style ID
/// let paper2 = client.fetch("math.AG/0601001").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArxivClient {
  /// Internal web client used to connect to the API.
  client:  reqwest::Client,
  /// Base URL of the API, without a trailing slash.
  api_url: String,
}

impl ArxivClient {
  /// Creates a new arXiv client talking to the public arXiv API.
  pub fn new() -> Self { Self::with_api_url(ARXIV_API_URL) }

  /// Creates a client talking to an arXiv-compatible API at `api_url`.
  pub fn with_api_url(api_url: impl Into<String>) -> Self {
    let api_url = api_url.into().trim_end_matches('/').to_string();
    Self { client: reqwest::Client::new(), api_url }
  }

  /// The base URL this client sends its queries to.
  pub fn api_url(&self) -> &str { &self.api_url }

  /// Fetches paper metadata from arXiv using its identifier.
  ///
  /// # Arguments
  ///
  /// * `identifier` - An arXiv paper identifier, used verbatim in the query and in the returned
  ///   record
  ///
  /// # Returns
  ///
  /// - `Ok(Some(record))` with the first complete matching paper
  /// - `Ok(None)` if arXiv has no paper for that identifier, or only error or partial entries
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - The network request fails
  /// - The API answers with a non-success status
  /// - The response cannot be parsed as an Atom feed
  pub async fn fetch(&self, identifier: &str) -> Result<Option<PaperRecord>, CiterError> {
    let url = Url::parse_with_params(&format!("{}/query", self.api_url), &[
      ("id_list", identifier),
      ("max_results", "1"),
    ])?;

    debug!("Fetching from arXiv via: {url}");

    let response = self.client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    trace!("arXiv response ({status}): {body}");

    if !status.is_success() {
      return Err(CiterError::ApiError(format!("arXiv responded with status {status}")));
    }

    let feed: Feed = from_str(&body)
      .map_err(|e| CiterError::ApiError(format!("Failed to parse XML: {}", e)))?;

    let record = feed.entries.into_iter().find_map(|entry| entry.into_record(identifier));
    if record.is_none() {
      debug!("No arXiv entry for identifier: {identifier}");
    }

    Ok(record)
  }
}

impl Default for ArxivClient {
  fn default() -> Self { Self::new() }
}
