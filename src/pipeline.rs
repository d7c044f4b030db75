//! The fetch→parse→normalize→filter→sort→truncate pipeline.
//!
//! One linear pass per invocation: any stage failure aborts the run and
//! propagates unchanged; there is no partial output and no retrying. Each
//! run owns its intermediates; nothing is shared across invocations.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::datetime;
use crate::error::{ErrorCode, PipelineError, Result};
use crate::feed::{normalize_entry, parse_feed, FeedFetcher, RawFeed};
use crate::model::{FeedItem, FeedMetadata, FeedRequest, FeedResult};

/// Hard bound on raw entries processed per run, independent of the
/// user-requested limit.
pub const SAFETY_LIMIT_ITEMS: usize = 500;

/// Item cap applied when the request leaves `max_items` unset.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Process-wide caps, fixed at pipeline construction.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub safety_cap: usize,
    pub default_max_items: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            safety_cap: SAFETY_LIMIT_ITEMS,
            default_max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

pub struct Pipeline {
    fetcher: FeedFetcher,
    limits: Limits,
}

impl Pipeline {
    pub fn new(fetcher: FeedFetcher, limits: Limits) -> Self {
        Self { fetcher, limits }
    }

    /// Run one request through every stage and assemble the result.
    ///
    /// # Errors
    ///
    /// - `INVALID_URL` - malformed URL or disallowed scheme
    /// - `INVALID_DATE_FORMAT` - `from_date`/`to_date` not ISO 8601
    /// - `INVALID_DATE_RANGE` - `from_date` after `to_date`
    /// - `FETCH_ERROR` - network, HTTP-status, or file-read failure
    /// - `PARSE_ERROR` - content is not valid RSS/Atom XML
    pub async fn run(&self, request: &FeedRequest) -> Result<FeedResult> {
        // Validate: URL scheme first, then the date bounds, all before any
        // network activity.
        let url = self.fetcher.validate(&request.feed_url)?;

        let from = datetime::parse_filter_date(request.from_date.as_deref(), "fromDate")?;
        let to = datetime::parse_filter_date(request.to_date.as_deref(), "toDate")?;

        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(PipelineError::new(
                    ErrorCode::InvalidDateRange,
                    format!(
                        "fromDate must be before or equal to toDate. \
                         Received fromDate: {}, toDate: {}",
                        request.from_date.as_deref().unwrap_or(""),
                        request.to_date.as_deref().unwrap_or("")
                    ),
                ));
            }
        }

        // Fetch and parse.
        let bytes = self.fetcher.fetch(&url).await?;
        let RawFeed {
            title,
            description,
            link,
            published,
            mut entries,
        } = parse_feed(&bytes)?;

        let metadata = FeedMetadata {
            title,
            description,
            link,
            last_build_date: published.map(datetime::format_utc),
        };

        // Safety cap: bound memory and work regardless of max_items. Old
        // entries beyond the cap are unreachable even for a from_date
        // filter that would match them; a known limitation, kept as is.
        let original_count = entries.len();
        if original_count > self.limits.safety_cap {
            tracing::warn!(
                feed_entries = original_count,
                safety_cap = self.limits.safety_cap,
                "Feed exceeds safety cap, excess entries dropped"
            );
            entries.truncate(self.limits.safety_cap);
        }
        let total_items = entries.len();

        tracing::debug!(
            total_items,
            feed_title = metadata.title.as_deref().unwrap_or(""),
            "Fetched feed entries"
        );

        // Normalize each retained entry, then pair every item with its
        // reparsed timestamp once; filter and sort both use it.
        let mut dated: Vec<(Option<DateTime<Utc>>, FeedItem)> = entries
            .into_iter()
            .map(normalize_entry)
            .map(|item| {
                let parsed = item
                    .published_date
                    .as_deref()
                    .and_then(datetime::reparse_item_date);
                (parsed, item)
            })
            .collect();

        // Filter: items with no readable date can never be excluded by a
        // date bound.
        if from.is_some() || to.is_some() {
            dated.retain(|(parsed, _)| match parsed {
                Some(date) => in_range(*date, from, to),
                None => true,
            });
        }

        // Sort newest first; undated items land after all dated ones, and
        // the sort is stable so ties keep their input order.
        dated.sort_by_key(|(parsed, _)| Reverse(*parsed));

        // User cap.
        let user_cap = request.max_items.unwrap_or(self.limits.default_max_items);
        let items: Vec<FeedItem> = dated
            .into_iter()
            .take(user_cap)
            .map(|(_, item)| item)
            .collect();

        let filtered_items = items.len();
        tracing::info!(total_items, filtered_items, "Feed processed");

        Ok(FeedResult {
            items,
            total_items,
            filtered_items,
            metadata,
        })
    }
}

fn in_range(date: DateTime<Utc>, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    // Both bounds are inclusive; an absent bound is open.
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;
    use chrono::TimeZone;

    fn pipeline() -> Pipeline {
        Pipeline::new(
            FeedFetcher::new(&FetchConfig::default()).unwrap(),
            Limits::default(),
        )
    }

    fn request(url: &str) -> FeedRequest {
        FeedRequest {
            feed_url: url.to_string(),
            max_items: None,
            from_date: None,
            to_date: None,
        }
    }

    #[test]
    fn test_in_range_is_inclusive() {
        let day = |d| Utc.with_ymd_and_hms(2025, 10, d, 0, 0, 0).unwrap();
        assert!(in_range(day(20), Some(day(20)), Some(day(25))));
        assert!(in_range(day(25), Some(day(20)), Some(day(25))));
        assert!(!in_range(day(19), Some(day(20)), None));
        assert!(!in_range(day(26), None, Some(day(25))));
        assert!(in_range(day(1), None, None));
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_fetch() {
        let err = pipeline()
            .run(&request("http://not a valid url"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidUrl);
    }

    #[tokio::test]
    async fn test_disallowed_scheme_fails_before_fetch() {
        let err = pipeline()
            .run(&request("gopher://example.com/feed"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidUrl);
    }

    #[tokio::test]
    async fn test_bad_from_date_fails_before_fetch() {
        let mut req = request("https://example.com/feed.xml");
        req.from_date = Some("yesterday".to_string());
        let err = pipeline().run(&req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateFormat);
        assert!(err.message.contains("fromDate"));
        assert!(err.message.contains("yesterday"));
    }

    #[tokio::test]
    async fn test_inverted_range_fails_with_both_inputs() {
        let mut req = request("https://example.com/feed.xml");
        req.from_date = Some("2025-10-25T00:00:00Z".to_string());
        req.to_date = Some("2025-10-20T00:00:00Z".to_string());
        let err = pipeline().run(&req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);
        assert!(err.message.contains("2025-10-25T00:00:00Z"));
        assert!(err.message.contains("2025-10-20T00:00:00Z"));
    }

    #[tokio::test]
    async fn test_equal_bounds_are_a_valid_range() {
        // from == to passes validation and fails later only on the fetch.
        let mut req = request("http://127.0.0.1:1/feed");
        req.from_date = Some("2025-10-20".to_string());
        req.to_date = Some("2025-10-20".to_string());
        let err = pipeline().run(&req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::FetchError);
    }
}
