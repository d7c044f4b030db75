//! feedsnap fetches a syndication feed (RSS/Atom) over HTTP, normalizes
//! its entries, applies date-range filtering and a result cap, and returns
//! the sorted items together with feed-level metadata.
//!
//! One invocation is one single-shot transformation: URL + parameters in,
//! a bounded, ordered, filtered item list out. The stages run as a linear
//! pass (validate, fetch, parse, safety-cap, normalize, filter, sort,
//! user-cap, assemble) and any stage failure aborts the whole run with a
//! coded [`PipelineError`].
//!
//! # Example
//!
//! ```no_run
//! use feedsnap::config::FetchConfig;
//! use feedsnap::feed::FeedFetcher;
//! use feedsnap::{FeedRequest, Limits, Pipeline};
//!
//! # async fn run() -> Result<(), feedsnap::PipelineError> {
//! let fetcher = FeedFetcher::new(&FetchConfig::default())?;
//! let pipeline = Pipeline::new(fetcher, Limits::default());
//!
//! let request = FeedRequest {
//!     feed_url: "https://example.com/feed.xml".to_string(),
//!     max_items: Some(20),
//!     from_date: Some("2025-01-01".to_string()),
//!     to_date: None,
//! };
//! let result = pipeline.run(&request).await?;
//! println!("{} of {} items kept", result.filtered_items, result.total_items);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod datetime;
pub mod error;
pub mod feed;
pub mod model;
pub mod pipeline;
pub mod util;

pub use error::{ErrorCode, PipelineError};
pub use model::{FeedItem, FeedMetadata, FeedRequest, FeedResult};
pub use pipeline::{Limits, Pipeline, DEFAULT_MAX_ITEMS, SAFETY_LIMIT_ITEMS};
