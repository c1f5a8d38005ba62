//! Error types for the citer library.
//!
//! A paper that simply does not exist is *not* an error: [`ArxivClient::fetch`] reports it as
//! `Ok(None)`. The variants here cover everything that can actually go wrong:
//! - Network failures talking to arXiv
//! - Unexpected or malformed API responses
//! - User input that cannot be turned into an arXiv identifier
//!
//! # Examples
//!
//! ```no_run
//! use citer::{ArxivClient, CiterError};
//!
//! # async fn example() -> Result<(), CiterError> {
//! match ArxivClient::new().fetch("2301.07041").await {
//!   Ok(Some(paper)) => println!("Found: {}", paper.title),
//!   Ok(None) => println!("Paper not found."),
//!   Err(CiterError::Network(e)) => println!("Network error: {}", e),
//!   Err(e) => println!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`ArxivClient::fetch`]: crate::clients::ArxivClient::fetch

use thiserror::Error;

/// Errors that can occur when fetching or formatting papers.
#[derive(Error, Debug)]
pub enum CiterError {
  /// The input could not be interpreted as an arXiv identifier.
  ///
  /// Only raised by [`crate::identifier::normalize`]; the fetcher itself passes identifiers
  /// through unvalidated.
  #[error("Invalid identifier format")]
  InvalidIdentifier,

  /// A style or initials option string couldn't be parsed.
  ///
  /// The string parameter contains the rejected value, see [`crate::format::Style`] and
  /// [`crate::format::InitialsStyle`] for the accepted ones.
  #[error("Invalid option: {0}")]
  InvalidOption(String),

  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - TLS/SSL errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The arXiv API answered, but not with something we can use.
  ///
  /// This covers non-success HTTP statuses, XML that does not parse as an Atom feed and
  /// entries missing a required field. The string carries the details for debugging.
  #[error("API error: {0}")]
  ApiError(String),

  /// Failed to parse a URL.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),
}
