//! Turning user input into an arXiv identifier.
//!
//! People paste all sorts of things: a bare identifier, an `arXiv:`-prefixed one, or the URL of
//! an abstract or PDF page. [`normalize`] accepts all of these and returns the bare identifier.
//! It is used by the command line and the landing-page form; the `/abs/` and `/pdf/` routes take
//! their identifier verbatim.
//!
//! # Examples
//!
//! ```
//! use citer::identifier::normalize;
//!
//! assert_eq!(normalize("2301.07041").unwrap(), "2301.07041");
//! assert_eq!(normalize("arXiv:2301.07041v2").unwrap(), "2301.07041v2");
//! assert_eq!(normalize("https://arxiv.org/abs/2301.07041").unwrap(), "2301.07041");
//! assert_eq!(normalize("https://arxiv.org/pdf/2301.07041v1.pdf").unwrap(), "2301.07041v1");
//! assert_eq!(normalize("math.AG/0601001").unwrap(), "math.AG/0601001");
//! assert!(normalize("10.1145/1327452.1327492").is_err());
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::*;

lazy_static! {
    // New-style identifiers, e.g. 2301.07041 or 2301.07041v2
    static ref ARXIV_NEW: Regex = Regex::new(r"^\d{4}\.\d{4,5}(v\d+)?$").unwrap();
    // Old-style identifiers, e.g. math.AG/0601001 or hep-th/9901001v1
    static ref ARXIV_OLD: Regex = Regex::new(r"^[a-zA-Z-]+(\.[a-zA-Z-]+)?/\d{7}(v\d+)?$").unwrap();
    // Path of an abstract or PDF page
    static ref ARXIV_PATH: Regex = Regex::new(r"^/(?:abs|pdf)/(.+?)(?:\.pdf)?/?$").unwrap();
}

/// Hosts that serve arXiv abstract and PDF pages.
const ARXIV_HOSTS: &[&str] = &["arxiv.org", "www.arxiv.org", "export.arxiv.org"];

/// Extracts a bare arXiv identifier from an identifier or arXiv URL.
///
/// # Errors
///
/// Returns [`CiterError::InvalidIdentifier`] if the input is neither a recognizable arXiv
/// identifier nor an arxiv.org abstract/PDF URL.
pub fn normalize(input: &str) -> Result<String, CiterError> {
  let input = input.trim();

  // `arXiv:2301.07041` parses as a URL with an `arxiv` scheme, so only web URLs count
  if let Some(url) =
    Url::parse(input).ok().filter(|url| matches!(url.scheme(), "http" | "https"))
  {
    return match url.host_str() {
      Some(host) if ARXIV_HOSTS.contains(&host) => extract_arxiv_id(&url),
      _ => Err(CiterError::InvalidIdentifier),
    };
  }

  let id = strip_prefix_ignore_case(input, "arxiv:").unwrap_or(input);
  if is_arxiv_id(id) {
    Ok(id.to_string())
  } else {
    Err(CiterError::InvalidIdentifier)
  }
}

/// Whether `id` looks like a new- or old-style arXiv identifier.
pub fn is_arxiv_id(id: &str) -> bool { ARXIV_NEW.is_match(id) || ARXIV_OLD.is_match(id) }

/// Extracts the arXiv identifier from an abstract or PDF URL.
///
/// Parses URLs like "https://arxiv.org/abs/2301.07041" to extract "2301.07041".
fn extract_arxiv_id(url: &Url) -> Result<String, CiterError> {
  let id = ARXIV_PATH
    .captures(url.path())
    .and_then(|cap| cap.get(1))
    .map(|m| m.as_str().to_string())
    .ok_or(CiterError::InvalidIdentifier)?;
  debug!("Extracted arXiv identifier {id} from {url}");
  if is_arxiv_id(&id) {
    Ok(id)
  } else {
    Err(CiterError::InvalidIdentifier)
  }
}

/// Strips an ASCII prefix regardless of case.
fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
  let head = input.get(..prefix.len())?;
  head.eq_ignore_ascii_case(prefix).then(|| &input[prefix.len()..])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bare_identifiers() {
    assert_eq!(normalize("2301.07041").unwrap(), "2301.07041");
    assert_eq!(normalize(" 2301.07041 ").unwrap(), "2301.07041");
    assert_eq!(normalize("0704.0001").unwrap(), "0704.0001");
    assert_eq!(normalize("hep-th/9901001v1").unwrap(), "hep-th/9901001v1");
    assert_eq!(normalize("ARXIV:2301.07041").unwrap(), "2301.07041");
  }

  #[test]
  fn test_urls() {
    assert_eq!(normalize("https://arxiv.org/abs/2301.07041").unwrap(), "2301.07041");
    assert_eq!(normalize("http://export.arxiv.org/abs/2301.07041v3").unwrap(), "2301.07041v3");
    assert_eq!(normalize("https://arxiv.org/pdf/2301.07041").unwrap(), "2301.07041");
    assert_eq!(normalize("https://arxiv.org/abs/math.AG/0601001").unwrap(), "math.AG/0601001");
  }

  #[test]
  fn test_rejected_inputs() {
    assert!(matches!(normalize(""), Err(CiterError::InvalidIdentifier)));
    assert!(normalize("not an id").is_err());
    assert!(normalize("2016/260").is_err());
    assert!(normalize("https://eprint.iacr.org/2016/260").is_err());
    assert!(normalize("https://arxiv.org/list/cs.CR/recent").is_err());
    assert!(normalize("arxiv:").is_err());
  }
}
