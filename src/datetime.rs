//! Date handling for filter parameters and item timestamps.
//!
//! Filter inputs arrive as strings produced by upstream tooling and come in
//! three accepted forms: a full offset date-time (`2025-01-01T00:00:00Z`),
//! a bare date (`2025-01-01`, read as midnight UTC), or a date-time with a
//! trailing bracketed zone name (`2025-10-25T12:20:31.434Z[GMT]`) whose
//! suffix is stripped before parsing. Timestamps flowing out of the parser
//! are rendered back as UTC RFC 3339.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

use crate::error::{ErrorCode, PipelineError, Result};

/// Parse an optional filter date string.
///
/// Blank or absent input is not an error; it means "no bound". `field`
/// names the request field for the error message.
pub fn parse_filter_date(value: Option<&str>, field: &str) -> Result<Option<DateTime<Utc>>> {
    let raw = match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(None),
    };

    let trimmed = raw.trim();
    // Upstream datetime values may carry a bracketed zone-name suffix;
    // everything from the bracket on is dropped.
    let normalized = match trimmed.find('[') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(normalized) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    if let Ok(date) = NaiveDate::parse_from_str(normalized, "%Y-%m-%d") {
        return Ok(Some(date.and_time(NaiveTime::MIN).and_utc()));
    }

    Err(PipelineError::new(
        ErrorCode::InvalidDateFormat,
        format!(
            "{field} must follow ISO 8601. Supported formats: \
             date (e.g., 2025-01-01), datetime (e.g., 2025-01-01T00:00:00Z). \
             Received: {raw}"
        ),
    ))
}

/// Render a parsed timestamp as UTC RFC 3339, e.g. `2025-10-26T10:30:00Z`.
pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Re-parse a previously formatted item timestamp.
///
/// Returns `None` instead of failing: an item whose stored date cannot be
/// read back is treated as undated.
pub fn reparse_item_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
