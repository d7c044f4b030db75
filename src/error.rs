use serde::Serialize;
use thiserror::Error;

/// Stable error codes surfaced across the boundary with every failure.
///
/// Each code identifies who can fix the problem: the first three are input
/// mistakes, the last two are environment problems (unreachable server,
/// broken feed document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed feed URL, or a scheme other than http/https/file.
    InvalidUrl,
    /// `fromDate`/`toDate` not in an accepted ISO 8601 form.
    InvalidDateFormat,
    /// `fromDate` is after `toDate`.
    InvalidDateRange,
    /// Network, HTTP-status, or file-read failure.
    FetchError,
    /// Fetched content is not valid RSS/Atom XML.
    ParseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidUrl => "INVALID_URL",
            ErrorCode::InvalidDateFormat => "INVALID_DATE_FORMAT",
            ErrorCode::InvalidDateRange => "INVALID_DATE_RANGE",
            ErrorCode::FetchError => "FETCH_ERROR",
            ErrorCode::ParseError => "PARSE_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure raised by any pipeline stage.
///
/// The message always includes the offending input (URL, date string,
/// status code, or parser diagnostic) so the caller can act on it without
/// digging through logs.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct PipelineError {
    pub code: ErrorCode,
    pub message: String,
}

impl PipelineError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = PipelineError::new(ErrorCode::FetchError, "HTTP status code: 404");
        assert_eq!(err.to_string(), "[FETCH_ERROR] HTTP status code: 404");
    }

    #[test]
    fn test_code_strings_are_stable() {
        assert_eq!(ErrorCode::InvalidUrl.as_str(), "INVALID_URL");
        assert_eq!(ErrorCode::InvalidDateFormat.as_str(), "INVALID_DATE_FORMAT");
        assert_eq!(ErrorCode::InvalidDateRange.as_str(), "INVALID_DATE_RANGE");
        assert_eq!(ErrorCode::FetchError.as_str(), "FETCH_ERROR");
        assert_eq!(ErrorCode::ParseError.as_str(), "PARSE_ERROR");
    }

    #[test]
    fn test_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::InvalidDateRange).unwrap();
        assert_eq!(json, "\"INVALID_DATE_RANGE\"");
    }
}
