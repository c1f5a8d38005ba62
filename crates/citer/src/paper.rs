//! The normalized paper metadata every citation is built from.
//!
//! A [`PaperRecord`] only exists for a paper that was actually found: the fetcher hands back
//! `Option<PaperRecord>` and absence is `None`, never an empty record.
//!
//! # Examples
//!
//! ```
//! use citer::PaperRecord;
//!
//! let paper = PaperRecord::new(
//!   "2301.00001",
//!   "Example Paper",
//!   vec!["Alice Smith".into(), "Bob Jones".into()],
//!   2023,
//!   "https://arxiv.org/pdf/2301.00001",
//! );
//!
//! assert_eq!(paper.first_author(), Some("Alice Smith"));
//! assert!(paper.has_multiple_authors());
//! ```

use super::*;

/// Metadata for a single arXiv paper, normalized from the API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
  /// The arXiv identifier exactly as the caller supplied it
  pub identifier: String,
  /// The paper's title, with line breaks and repeated spaces collapsed
  pub title:      String,
  /// Full display names of the authors, first author first
  pub authors:    Vec<String>,
  /// Four-digit publication year
  pub year:       i32,
  /// Absolute URL of the paper's PDF
  pub pdf_url:    String,
}

impl PaperRecord {
  /// Builds a record from already-normalized parts.
  pub fn new(
    identifier: impl Into<String>,
    title: impl Into<String>,
    authors: Vec<String>,
    year: i32,
    pdf_url: impl Into<String>,
  ) -> Self {
    Self {
      identifier: identifier.into(),
      title: title.into(),
      authors,
      year,
      pdf_url: pdf_url.into(),
    }
  }

  /// The first author's full name, if the record has any authors.
  pub fn first_author(&self) -> Option<&str> { self.authors.first().map(String::as_str) }

  /// Whether the paper has more than one author.
  pub fn has_multiple_authors(&self) -> bool { self.authors.len() > 1 }
}

/// Collapses every run of whitespace (including newlines) into a single space.
///
/// arXiv wraps long titles over several lines in its feed; citations want them on one.
pub(crate) fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("Hello World"), "Hello World");
    assert_eq!(
      collapse_whitespace("Verifiable Fully\n  Homomorphic Encryption"),
      "Verifiable Fully Homomorphic Encryption"
    );
    assert_eq!(collapse_whitespace("  padded  "), "padded");
    assert_eq!(collapse_whitespace(""), "");
  }

  #[test]
  fn test_single_author_record() {
    let paper =
      PaperRecord::new("2301.00001", "Solo", vec!["Ada Lovelace".into()], 2023, "https://x/pdf");
    assert_eq!(paper.first_author(), Some("Ada Lovelace"));
    assert!(!paper.has_multiple_authors());
  }
}
