use std::fmt;
use std::time::Duration;

/// HTTP verb issued by a request method.
///
/// The verb is always supplied by the method that issues the call
/// (`get`, `serial_post`, ...), never by the caller's config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call request options.
///
/// Every field other than `url` is optional; defaults configured on the
/// client are folded underneath per-call values during the merge. The
/// target may be relative when the client carries a base URL.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tandem_client::RequestConfig;
///
/// let config = RequestConfig::new("people/1")
///     .header("Authorization", "Bearer token")
///     .query("expand", "friends")
///     .timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Target URL, absolute or relative to the client's base URL.
    pub url: String,

    /// Headers sent with the request. Per-call headers override same-named
    /// defaults; unrelated defaults are kept.
    pub headers: Vec<(String, String)>,

    /// Query pairs appended to the resolved URL after any pairs already
    /// present in the target.
    pub query: Vec<(String, String)>,

    /// JSON body payload.
    pub body: Option<serde_json::Value>,

    /// Per-call timeout handed through to the transport.
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Add a single header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Replace all headers at once.
    #[must_use]
    pub fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Add a query pair.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Set the JSON body.
    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the per-call timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A fully merged request ready for the wire: absolute URL, verb fixed by
/// the issuing request method, defaults folded underneath per-call options.
///
/// This is what [`Transport`](crate::Transport) implementations consume.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub timeout: Option<Duration>,
}
