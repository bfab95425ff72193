//! Contract checks applied at public entry points.
//!
//! Each check pairs a predicate with the violation it raises; callers `?`
//! them before doing any work, so a bad argument fails the call before any
//! transport traffic is issued.

use url::Url;

use crate::error::{Error, Result};

/// The argument must parse as an absolute http(s) URL.
pub(crate) fn must_be_absolute_url(input: &str) -> Result<Url> {
    let parsed =
        Url::parse(input).map_err(|e| Error::InvalidUrl(format!("`{input}`: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "`{input}`: unsupported scheme `{}`",
            parsed.scheme()
        )));
    }
    Ok(parsed)
}

/// The per-call target must name something requestable: a non-empty URL,
/// or any relative reference (the base itself included) when a base URL is
/// configured.
pub(crate) fn must_be_requestable(target: &str, has_base: bool) -> Result<()> {
    if target.trim().is_empty() && !has_base {
        return Err(Error::Contract(
            "request target must not be empty without a base URL".to_string(),
        ));
    }
    Ok(())
}
