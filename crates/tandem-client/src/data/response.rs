use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// One settled exchange: the response on success, the crate error on
/// failure. This is the single value a continuation receives.
pub type Outcome = std::result::Result<Response, Error>;

/// A completed HTTP exchange described as plain data.
///
/// Constructed by the transport after executing a [`PreparedRequest`]
/// (any status counts — classification into success or failure happens in
/// the client). All fields are owned so responses can be moved through
/// interceptor stages and continuations freely.
///
/// [`PreparedRequest`]: crate::PreparedRequest
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Final URL of the exchange, after any transport-level redirects.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Response body, parsed as JSON when possible and carried as a JSON
    /// string value otherwise.
    pub body: serde_json::Value,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(Error::Decode)
    }
}
