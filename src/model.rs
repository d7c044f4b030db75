//! Request and result shapes exchanged with the hosting boundary.
//!
//! Field names serialize in camelCase to match the wire shape the boundary
//! layer exposes. Every item and metadata field is independently optional:
//! absence is meaningful and is never replaced with an empty-string
//! sentinel.

use serde::{Deserialize, Serialize};

/// One pipeline invocation's input.
///
/// The boundary layer is expected to have checked structure already
/// (non-blank URL, `max_items` within 1–500); the pipeline re-validates
/// only the cross-field rules: URL scheme and date ordering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRequest {
    pub feed_url: String,
    #[serde(default)]
    pub max_items: Option<usize>,
    /// Keep items published on or after this date (ISO 8601 string).
    #[serde(default)]
    pub from_date: Option<String>,
    /// Keep items published on or before this date (ISO 8601 string).
    #[serde(default)]
    pub to_date: Option<String>,
}

/// A single normalized feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    /// Publication timestamp rendered as UTC RFC 3339, e.g.
    /// `2025-10-26T10:30:00Z`.
    pub published_date: Option<String>,
    pub author: Option<String>,
    /// Category labels in source order; blanks dropped, duplicates kept.
    pub categories: Vec<String>,
    pub guid: Option<String>,
}

/// Feed-level fields describing the channel itself, not any item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub last_build_date: Option<String>,
}

/// Final pipeline output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResult {
    /// Filtered, sorted, capped items.
    pub items: Vec<FeedItem>,
    /// Entry count after the safety cap, before filtering.
    pub total_items: usize,
    /// Count after filtering and the user cap; equals `items.len()`.
    pub filtered_items: usize,
    pub metadata: FeedMetadata,
}
