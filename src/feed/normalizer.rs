use crate::datetime;
use crate::model::FeedItem;

use super::parser::RawEntry;

/// Convert one raw entry into the output item shape.
///
/// Best-effort and infallible: a field missing from the source stays
/// absent in the output and never invalidates the item.
pub fn normalize_entry(entry: RawEntry) -> FeedItem {
    // Publish date wins; an entry carrying only an update date keeps that.
    let published_date = entry
        .published
        .or(entry.updated)
        .map(datetime::format_utc);

    let categories: Vec<String> = entry
        .categories
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .collect();

    FeedItem {
        title: entry.title,
        link: entry.link,
        description: entry.description,
        published_date,
        author: entry.author,
        categories,
        guid: entry.guid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_entry_yields_empty_item() {
        let item = normalize_entry(RawEntry::default());
        assert_eq!(
            item,
            FeedItem {
                title: None,
                link: None,
                description: None,
                published_date: None,
                author: None,
                categories: vec![],
                guid: None,
            }
        );
    }

    #[test]
    fn test_published_date_formats_as_utc() {
        let entry = RawEntry {
            published: Some(Utc.with_ymd_and_hms(2025, 10, 26, 10, 30, 0).unwrap()),
            ..Default::default()
        };
        let item = normalize_entry(entry);
        assert_eq!(item.published_date.as_deref(), Some("2025-10-26T10:30:00Z"));
    }

    #[test]
    fn test_updated_date_used_when_published_absent() {
        let entry = RawEntry {
            updated: Some(Utc.with_ymd_and_hms(2025, 10, 20, 8, 0, 0).unwrap()),
            ..Default::default()
        };
        let item = normalize_entry(entry);
        assert_eq!(item.published_date.as_deref(), Some("2025-10-20T08:00:00Z"));
    }

    #[test]
    fn test_published_wins_over_updated() {
        let entry = RawEntry {
            published: Some(Utc.with_ymd_and_hms(2025, 10, 25, 9, 0, 0).unwrap()),
            updated: Some(Utc.with_ymd_and_hms(2025, 10, 26, 9, 0, 0).unwrap()),
            ..Default::default()
        };
        let item = normalize_entry(entry);
        assert_eq!(item.published_date.as_deref(), Some("2025-10-25T09:00:00Z"));
    }

    #[test]
    fn test_blank_categories_dropped_order_and_duplicates_kept() {
        let entry = RawEntry {
            categories: vec![
                "tech".to_string(),
                "".to_string(),
                "   ".to_string(),
                "rust".to_string(),
                "tech".to_string(),
            ],
            ..Default::default()
        };
        let item = normalize_entry(entry);
        assert_eq!(item.categories, vec!["tech", "rust", "tech"]);
    }

    #[test]
    fn test_scalar_fields_pass_through() {
        let entry = RawEntry {
            title: Some("Title".to_string()),
            link: Some("https://example.com/a".to_string()),
            description: Some("<p>Body</p>".to_string()),
            author: Some("Alice".to_string()),
            guid: Some("guid-1".to_string()),
            ..Default::default()
        };
        let item = normalize_entry(entry);
        assert_eq!(item.title.as_deref(), Some("Title"));
        assert_eq!(item.link.as_deref(), Some("https://example.com/a"));
        assert_eq!(item.description.as_deref(), Some("<p>Body</p>"));
        assert_eq!(item.author.as_deref(), Some("Alice"));
        assert_eq!(item.guid.as_deref(), Some("guid-1"));
    }
}
