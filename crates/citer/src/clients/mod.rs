//! Clients for fetching paper metadata from external sources.
//!
//! Only arXiv is supported: [`arxiv::ArxivClient`] queries the arXiv Atom API and converts the
//! first matching entry into the common [`PaperRecord`] format.
//!
//! # Examples
//!
//! ```no_run
//! use citer::clients::ArxivClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(paper) = ArxivClient::new().fetch("2301.07041").await? {
//!   println!("{} ({})", paper.title, paper.year);
//! }
//! # Ok(())
//! # }
//! ```

use quick_xml::de::from_str;

pub mod arxiv;

pub use arxiv::ArxivClient;

use super::*;
