//! Shared helpers.
//!
//! Currently just feed URL validation, applied both by the pipeline's
//! validate stage and by the fetcher before any network activity.

mod url_validator;

pub use url_validator::{validate_feed_url, UrlValidationError};
