use std::fmt;

use crate::data::{RequestConfig, Response};
use crate::error::Error;

/// Outbound stage: maps the per-call config before it is merged and sent.
pub type RequestStage = Box<dyn Fn(RequestConfig) -> RequestConfig + Send + Sync>;

/// Inbound success stage: may map the response or fail the call.
pub type ResponseStage = Box<dyn Fn(Response) -> std::result::Result<Response, Error> + Send + Sync>;

/// Inbound failure stage: may recover into a response or keep failing.
pub type ErrorStage = Box<dyn Fn(Error) -> std::result::Result<Response, Error> + Send + Sync>;

/// One installed response/error pair.
///
/// The two sides are bound together at registration: a single `intercepts`
/// call produces at most one pair, each side defaulted independently when
/// absent. On every call the settled outcome enters exactly one side.
pub(crate) struct StagePair {
    pub(crate) on_response: ResponseStage,
    pub(crate) on_error: ErrorStage,
}

/// Interceptor functions accepted by [`Client::intercepts`].
///
/// Any subset of the three stages may be present. Absent response/error
/// sides are defaulted against each other at registration; see
/// [`Client::intercepts`] for the pairing rules.
///
/// [`Client::intercepts`]: crate::Client::intercepts
///
/// # Examples
///
/// ```
/// use tandem_client::InterceptorSet;
///
/// let set = InterceptorSet::new()
///     .on_request(|config| config.header("X-Trace", "1"))
///     .on_response(|response| {
///         tracing::debug!(status = response.status, "exchange settled");
///         Ok(response)
///     });
/// ```
#[derive(Default)]
pub struct InterceptorSet {
    pub(crate) request: Option<RequestStage>,
    pub(crate) response: Option<ResponseStage>,
    pub(crate) error: Option<ErrorStage>,
}

impl InterceptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outbound request stage.
    #[must_use]
    pub fn on_request<F>(mut self, f: F) -> Self
    where
        F: Fn(RequestConfig) -> RequestConfig + Send + Sync + 'static,
    {
        self.request = Some(Box::new(f));
        self
    }

    /// Set the inbound response stage.
    #[must_use]
    pub fn on_response<F>(mut self, f: F) -> Self
    where
        F: Fn(Response) -> std::result::Result<Response, Error> + Send + Sync + 'static,
    {
        self.response = Some(Box::new(f));
        self
    }

    /// Set the inbound error stage.
    #[must_use]
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(Error) -> std::result::Result<Response, Error> + Send + Sync + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for InterceptorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorSet")
            .field("request", &self.request.as_ref().map(|_| "{ ... }"))
            .field("response", &self.response.as_ref().map(|_| "{ ... }"))
            .field("error", &self.error.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}
