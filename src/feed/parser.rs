use chrono::{DateTime, Utc};
use feed_rs::parser;

use crate::error::{ErrorCode, PipelineError, Result};

/// Feed-level fields plus the ordered raw entry list.
///
/// The syndication dialect (RSS 0.9x/1.0/2.0, Atom 0.3/1.0) is resolved
/// here; downstream stages only ever see this shape.
#[derive(Debug, Clone)]
pub struct RawFeed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub entries: Vec<RawEntry>,
}

/// One entry as the document provided it, every field independently
/// optional. Category labels are passed through untouched; blank-name
/// filtering is the normalizer's job.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub guid: Option<String>,
}

pub fn parse_feed(bytes: &[u8]) -> Result<RawFeed> {
    // feed-rs handles encoding detection (BOM, XML declaration) and the
    // format dialects internally.
    let feed = parser::parse(bytes).map_err(|e| {
        PipelineError::new(
            ErrorCode::ParseError,
            format!("Failed to parse feed. The content may not be valid RSS/Atom XML: {e}"),
        )
    })?;

    let entries = feed.entries.into_iter().map(raw_entry).collect();

    Ok(RawFeed {
        title: feed.title.map(|t| t.content),
        description: feed.description.map(|t| t.content),
        link: feed.links.into_iter().next().map(|l| l.href),
        published: feed.published,
        entries,
    })
}

fn raw_entry(entry: feed_rs::model::Entry) -> RawEntry {
    let link = entry.links.into_iter().next().map(|l| l.href);
    let description = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body));
    let author = entry.authors.into_iter().next().map(|p| p.name);
    let categories = entry
        .categories
        .into_iter()
        .map(|c| c.label.unwrap_or(c.term))
        .collect();
    let guid = if entry.id.is_empty() {
        None
    } else {
        Some(entry.id)
    };

    RawEntry {
        title: entry.title.map(|t| t.content),
        link,
        description,
        author,
        categories,
        published: entry.published,
        updated: entry.updated,
        guid,
    }
}
