//! A library for fetching arXiv paper metadata and turning it into ready-to-copy citations.
//!
//! The crate has two halves:
//! - [`clients::arxiv`] looks a paper up on the arXiv API and normalizes the answer into a
//!   [`PaperRecord`]
//! - [`format`] renders a [`PaperRecord`] into a [`CitationSet`] of BibTeX, IEEE, APA (and the
//!   legacy PubMed) strings
//!
//! # Example
//! ```rust,no_run
//! use citer::{ArxivClient, CitationFormatter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   let Some(paper) = ArxivClient::new().fetch("2301.07041").await? else {
//!     println!("Paper not found.");
//!     return Ok(());
//!   };
//!
//!   let citations = CitationFormatter::default().citations(&paper);
//!   for (style, citation) in citations.iter() {
//!     println!("{style}:\n{citation}\n");
//!   }
//!
//!   Ok(())
//! }
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
#[cfg(test)] use tracing_test::traced_test;

pub mod clients;
pub mod errors;
pub mod format;
pub mod identifier;
pub mod paper;

pub use clients::ArxivClient;
pub use errors::CiterError;
pub use format::{CitationFormatter, CitationSet, InitialsStyle, Style, StyleSet};
pub use paper::PaperRecord;
