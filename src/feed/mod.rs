//! Feed retrieval and decoding for RSS/Atom sources.
//!
//! This module covers the middle of the pipeline:
//!
//! - [`fetcher`] - URL validation and raw byte retrieval (HTTP/HTTPS with
//!   timeouts and redirects, plus a `file://` fallback for local fixtures)
//! - [`parser`] - Dialect-independent decoding via the `feed-rs` crate
//! - [`normalizer`] - Per-entry conversion into the output item shape

mod fetcher;
mod normalizer;
mod parser;

pub use fetcher::FeedFetcher;
pub use normalizer::normalize_entry;
pub use parser::{parse_feed, RawEntry, RawFeed};
