//! Redirect target resolution.
//!
//! Decides, from one hop's response, whether the chain continues and where.

use std::borrow::Cow;

use log::warn;
use percent_encoding::{percent_encode, CONTROLS};
use url::Url;

use super::hop::HopResponse;
use crate::error_handling::RedirectTargetError;

/// Resolves the next hop's URL from a response.
///
/// Any 3xx status with a `Location` header continues the chain; the specific
/// code (301, 302, 303, 307, 308, ...) does not matter. Relative locations are
/// resolved against `current`.
///
/// # Returns
///
/// - `Ok(Some(url))` - follow the redirect to `url`
/// - `Ok(None)` - terminal response (not a redirect, or no `Location`)
///
/// # Errors
///
/// Returns a `RedirectTargetError` if the `Location` header is present but
/// empty or not a URL. Raw non-UTF-8 bytes (Latin-1 from older servers) are
/// percent-encoded and followed, as browsers do.
pub fn redirect_target(
    response: &HopResponse,
    current: &Url,
) -> Result<Option<Url>, RedirectTargetError> {
    let status = response.status();
    if !status.is_redirection() {
        return Ok(None);
    }

    let Some(location) = response.location() else {
        // 304 Not Modified lands here routinely; anything else is unusual
        if status != reqwest::StatusCode::NOT_MODIFIED {
            warn!("Redirect status {status} for {current} but no Location header");
        }
        return Ok(None);
    };

    let location = match std::str::from_utf8(location.as_bytes()) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(percent_encode(location.as_bytes(), CONTROLS).to_string()),
    };
    let location = location.trim();
    if location.is_empty() {
        return Err(RedirectTargetError::Empty);
    }

    // join() also accepts absolute URLs, replacing the base entirely
    Ok(Some(current.join(location)?))
}
