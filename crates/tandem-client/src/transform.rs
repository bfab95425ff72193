//! Body transform chains and the logging transforms installed by
//! [`Client::logs`](crate::Client::logs).
//!
//! Transforms run closest to the wire: request transforms after the merge
//! and the request interceptor stages, response transforms before the
//! response/error stage pairs. An absent body enters the chain as
//! `Value::Null` and leaves the config unset if it is still null afterward.

use std::fmt;

use serde_json::Value;

/// Outbound body transform. Receives the body and a view of the merged
/// headers, returns the (possibly replaced) body.
pub type RequestTransform = Box<dyn Fn(Value, &[(String, String)]) -> Value + Send + Sync>;

/// Inbound body transform.
pub type ResponseTransform = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// Transform chains accepted by [`Client::transforms`](crate::Client::transforms).
///
/// Chains accumulate: every call appends to the client's installed
/// transforms rather than replacing them.
#[derive(Default)]
pub struct TransformSet {
    pub(crate) request: Vec<RequestTransform>,
    pub(crate) response: Vec<ResponseTransform>,
}

impl TransformSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outbound body transform.
    #[must_use]
    pub fn request<F>(mut self, f: F) -> Self
    where
        F: Fn(Value, &[(String, String)]) -> Value + Send + Sync + 'static,
    {
        self.request.push(Box::new(f));
        self
    }

    /// Append an inbound body transform.
    #[must_use]
    pub fn response<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.response.push(Box::new(f));
        self
    }
}

impl fmt::Debug for TransformSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformSet")
            .field("request", &self.request.len())
            .field("response", &self.response.len())
            .finish()
    }
}

/// Toggles for the logging transforms. Both sides default to on.
#[derive(Debug, Clone, Copy)]
pub struct LogOptions {
    pub request: bool,
    pub response: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            request: true,
            response: true,
        }
    }
}

/// Logging transform for outbound requests. Emits the body (when present)
/// and the merged headers, then passes the body through unchanged.
pub(crate) fn log_request() -> RequestTransform {
    Box::new(|body, headers| {
        if !body.is_null() {
            tracing::info!(target: "tandem_client", body = %body, "request body");
        }
        tracing::info!(target: "tandem_client", headers = ?headers, "request headers");
        body
    })
}

/// Logging transform for inbound responses. Passes the body through
/// unchanged.
pub(crate) fn log_response() -> ResponseTransform {
    Box::new(|body| {
        tracing::info!(target: "tandem_client", body = %body, "response body");
        body
    })
}
