//! Web front end and command line for the citer library.
//!
//! The binary serves two pages: a landing page with a lookup form, and a paper page that shows an
//! arXiv paper's metadata next to copyable citations. The same lookup is also available on the
//! terminal through `citerd cite`.
//!
//! The pieces are split so the router can be exercised without a socket:
//! - [`config`] holds the [`ServerConfig`] built once at startup
//! - [`server`] builds the axum [`Router`](axum::Router) from that configuration
//! - [`errors`] maps failures onto HTTP responses

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use citer::{ArxivClient, CitationFormatter, CiterError, InitialsStyle, PaperRecord, StyleSet};
use tracing::{debug, error, info};

pub mod config;
pub mod errors;
pub mod server;

pub use config::ServerConfig;
pub use errors::CiterdError;
