//! URL normalization for ad-hoc input.

use log::debug;

use crate::config::DEFAULT_SCHEME;

/// Normalizes a URL typed on the command line.
///
/// Trims surrounding whitespace and prepends `http://` when the input has no
/// scheme (`example.com/path` becomes `http://example.com/path`). Nothing else
/// is validated here: a malformed result is reported by the tracer as an
/// invalid URL before any request is made.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        debug!("No scheme in {trimmed:?}, assuming {DEFAULT_SCHEME}");
        format!("{DEFAULT_SCHEME}{trimmed}")
    }
}

/// True if `url` starts with `scheme://`, where scheme follows RFC 3986
/// (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`).
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
