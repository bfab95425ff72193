//! Default/per-call config merging and base-URL resolution.

use url::Url;

use crate::core::contract;
use crate::data::{Method, PreparedRequest, RequestConfig};
use crate::error::{Error, Result};

/// Merge client defaults underneath a per-call config and fix the verb.
///
/// The verb always comes from the issuing request method. Per-call headers
/// override same-named defaults; default query pairs are appended before
/// per-call pairs; the per-call body and timeout win when present.
pub(crate) fn prepare(
    method: Method,
    defaults: &RequestConfig,
    base_url: Option<&Url>,
    config: RequestConfig,
) -> Result<PreparedRequest> {
    contract::must_be_requestable(&config.url, base_url.is_some())?;
    let mut target = resolve_target(base_url, &config.url)?;

    if !defaults.query.is_empty() || !config.query.is_empty() {
        let mut pairs = target.query_pairs_mut();
        pairs.extend_pairs(defaults.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        pairs.extend_pairs(config.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    let mut headers = defaults.headers.clone();
    for (name, value) in config.headers {
        upsert_header(&mut headers, name, value);
    }

    Ok(PreparedRequest {
        method,
        url: target.to_string(),
        headers,
        body: config.body.or_else(|| defaults.body.clone()),
        timeout: config.timeout.or(defaults.timeout),
    })
}

/// Resolve a per-call target against the optional base URL.
///
/// Absolute http(s) targets are taken as-is; anything relative requires a
/// base to join against. Absolute targets with other schemes are rejected
/// rather than joined, since a scheme-carrying target was clearly not meant
/// as a relative reference.
fn resolve_target(base: Option<&Url>, target: &str) -> Result<Url> {
    match Url::parse(target) {
        Ok(absolute) if matches!(absolute.scheme(), "http" | "https") => Ok(absolute),
        Ok(other) => Err(Error::InvalidUrl(format!(
            "`{target}`: unsupported scheme `{}`",
            other.scheme()
        ))),
        Err(_) => match base {
            Some(base) => base
                .join(target)
                .map_err(|e| Error::InvalidUrl(format!("`{target}`: {e}"))),
            None => Err(Error::Contract(format!(
                "relative target `{target}` requires a base URL"
            ))),
        },
    }
}

fn upsert_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    if let Some(existing) = headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
        existing.1 = value;
    } else {
        headers.push((name, value));
    }
}
