//! Request header parsing.
//!
//! Headers are supplied as `Name: value` strings (the same shape curl uses for
//! `-H`) and collected into a multi-valued `HeaderMap` that is attached to
//! every hop.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error_handling::InitializationError;

/// Parses a single `Name: value` header line.
///
/// Whitespace around the name and the value is trimmed. An empty value is
/// allowed (`X-Empty:`), a missing colon is not.
///
/// # Errors
///
/// Returns `InitializationError::InvalidHeader` if the line has no colon or the
/// name or value contains characters HTTP does not allow.
pub fn parse_header_line(line: &str) -> Result<(HeaderName, HeaderValue), InitializationError> {
    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| InitializationError::InvalidHeader {
            header: line.to_string(),
            reason: "expected `Name: value`".to_string(),
        })?;

    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| {
        InitializationError::InvalidHeader {
            header: line.to_string(),
            reason: e.to_string(),
        }
    })?;
    let value =
        HeaderValue::from_str(value.trim()).map_err(|e| InitializationError::InvalidHeader {
            header: line.to_string(),
            reason: e.to_string(),
        })?;

    Ok((name, value))
}

/// Builds a header map from `Name: value` lines.
///
/// Repeated names are appended rather than replaced, so a header may carry
/// several values.
///
/// # Errors
///
/// Returns the first parse error encountered.
pub fn build_header_map<S: AsRef<str>>(lines: &[S]) -> Result<HeaderMap, InitializationError> {
    let mut headers = HeaderMap::new();
    for line in lines {
        let (name, value) = parse_header_line(line.as_ref())?;
        headers.append(name, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_line_basic() {
        let (name, value) = parse_header_line("Accept: text/html").expect("valid header");
        assert_eq!(name.as_str(), "accept");
        assert_eq!(value, "text/html");
    }

    #[test]
    fn test_parse_header_line_trims_whitespace() {
        let (name, value) = parse_header_line("  X-Trace-Id :   abc123  ").expect("valid header");
        assert_eq!(name.as_str(), "x-trace-id");
        assert_eq!(value, "abc123");
    }

    #[test]
    fn test_parse_header_line_empty_value() {
        let (name, value) = parse_header_line("X-Empty:").expect("empty value is allowed");
        assert_eq!(name.as_str(), "x-empty");
        assert_eq!(value, "");
    }

    #[test]
    fn test_parse_header_line_value_with_colon() {
        // Only the first colon separates name from value
        let (_, value) = parse_header_line("Referer: https://example.com/").expect("valid");
        assert_eq!(value, "https://example.com/");
    }

    #[test]
    fn test_parse_header_line_missing_colon() {
        let err = parse_header_line("NoColonHere").unwrap_err();
        assert!(matches!(err, InitializationError::InvalidHeader { .. }));
        assert!(err.to_string().contains("NoColonHere"));
    }

    #[test]
    fn test_parse_header_line_invalid_name() {
        let err = parse_header_line("Bad Name: value").unwrap_err();
        assert!(matches!(err, InitializationError::InvalidHeader { .. }));
    }

    #[test]
    fn test_build_header_map_appends_repeated_names() {
        let headers =
            build_header_map(&["Accept: text/html", "Accept: application/json", "X-One: 1"])
                .expect("valid headers");
        let accepts: Vec<_> = headers.get_all("accept").iter().collect();
        assert_eq!(accepts.len(), 2);
        assert_eq!(headers.get("x-one").map(|v| v.as_bytes()), Some(&b"1"[..]));
    }

    #[test]
    fn test_build_header_map_empty() {
        let headers = build_header_map::<&str>(&[]).expect("no headers");
        assert!(headers.is_empty());
    }
}
