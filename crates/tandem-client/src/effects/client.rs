use std::fmt;

use url::Url;

use super::transport::Transport;
#[cfg(feature = "reqwest")]
use super::transport::ReqwestTransport;
use crate::core::{contract, merge, stages};
use crate::data::intercept::{RequestStage, StagePair};
use crate::data::{InterceptorSet, Method, Outcome, RequestConfig, Response};
use crate::error::{Error, Result};
use crate::transform::{self, LogOptions, RequestTransform, ResponseTransform, TransformSet};

/// HTTP client facade over a pluggable [`Transport`].
///
/// The client owns one transport, the default request options, the optional
/// base URL, and the installed interceptor and transform chains.
/// Configuration happens through fluent consuming setters during setup;
/// requests then take `&self`.
///
/// # Examples
///
/// ```no_run
/// use tandem_client::{Client, InterceptorSet, RequestConfig};
///
/// # async fn run() -> tandem_client::Result<()> {
/// let client = Client::new()?
///     .set_base_url("http://127.0.0.1:3000")?
///     .intercepts(InterceptorSet::new().on_request(|c| c.header("X-Trace", "1")));
///
/// let person = client.get(RequestConfig::new("people/1")).await?;
/// println!("{}", person.body);
/// # Ok(())
/// # }
/// ```
pub struct Client<C: Transport> {
    transport: C,
    defaults: RequestConfig,
    base_url: Option<Url>,
    request_stages: Vec<RequestStage>,
    stage_pairs: Vec<StagePair>,
    request_transforms: Vec<RequestTransform>,
    response_transforms: Vec<ResponseTransform>,
}

impl<C: Transport> fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("defaults", &self.defaults)
            .field("base_url", &self.base_url)
            .field("request_stages", &self.request_stages.len())
            .field("stage_pairs", &self.stage_pairs.len())
            .field("request_transforms", &self.request_transforms.len())
            .field("response_transforms", &self.response_transforms.len())
            .finish()
    }
}

/// Options every default-transport client starts from: JSON in, JSON out.
#[cfg(feature = "reqwest")]
fn default_options() -> RequestConfig {
    RequestConfig::default().header("Content-Type", "application/json")
}

#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
    /// Create a client over the default reqwest transport with the stock
    /// JSON default options.
    pub fn new() -> Result<Self> {
        Ok(Self::from_transport(ReqwestTransport::new()?, default_options()))
    }

    /// Create a client over the default reqwest transport with caller-
    /// supplied default options.
    pub fn with_defaults(defaults: RequestConfig) -> Result<Self> {
        Ok(Self::from_transport(ReqwestTransport::new()?, defaults))
    }
}

impl<C: Transport> Client<C> {
    /// Build a client over any transport implementation.
    pub fn from_transport(transport: C, defaults: RequestConfig) -> Self {
        Self {
            transport,
            defaults,
            base_url: None,
            request_stages: Vec::new(),
            stage_pairs: Vec::new(),
            request_transforms: Vec::new(),
            response_transforms: Vec::new(),
        }
    }

    /// Set the base URL that relative per-call targets resolve against.
    ///
    /// # Errors
    ///
    /// Contract violation unless `url` is an absolute http(s) URL.
    pub fn set_base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(contract::must_be_absolute_url(url.as_ref())?);
        Ok(self)
    }

    /// Install an interceptor set.
    ///
    /// Response and error are a coupled pair: supplying either installs
    /// both, with the absent side defaulted to a pass-through — omitting
    /// only `error` does not disable the response stage, and vice versa.
    /// Supplying neither installs no pair. The request stage is independent
    /// and installs alone. Repeated calls accumulate; every installed stage
    /// runs on every request, in installation order.
    #[must_use]
    pub fn intercepts(mut self, set: InterceptorSet) -> Self {
        let resolved = stages::resolve(set);
        if let Some(request) = resolved.request {
            self.request_stages.push(request);
        }
        if let Some(pair) = resolved.pair {
            self.stage_pairs.push(pair);
        }
        self
    }

    /// Append request/response body transform chains.
    #[must_use]
    pub fn transforms(mut self, set: TransformSet) -> Self {
        self.request_transforms.extend(set.request);
        self.response_transforms.extend(set.response);
        self
    }

    /// Install logging transforms for outbound and/or inbound bodies.
    /// Both sides default to on; events are emitted through `tracing`.
    #[must_use]
    pub fn logs(mut self, options: LogOptions) -> Self {
        if options.request {
            self.request_transforms.push(transform::log_request());
        }
        if options.response {
            self.response_transforms.push(transform::log_response());
        }
        self
    }

    /// Send a GET request.
    pub async fn get(&self, config: RequestConfig) -> Result<Response> {
        self.dispatch(Method::Get, config).await
    }

    /// Send a POST request.
    pub async fn post(&self, config: RequestConfig) -> Result<Response> {
        self.dispatch(Method::Post, config).await
    }

    /// Send a PUT request.
    pub async fn put(&self, config: RequestConfig) -> Result<Response> {
        self.dispatch(Method::Put, config).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, config: RequestConfig) -> Result<Response> {
        self.dispatch(Method::Delete, config).await
    }

    /// Send a GET request and hand the settled outcome to `cb`.
    ///
    /// Supplying a continuation converts failure into a value: the future
    /// resolves to `cb(Err(e))` instead of failing, and the continuation's
    /// return value becomes the call's result.
    pub async fn get_with<T, F>(&self, config: RequestConfig, cb: F) -> T
    where
        F: FnOnce(Outcome) -> T,
    {
        stages::settle(self.dispatch(Method::Get, config).await, cb)
    }

    /// Send a POST request and hand the settled outcome to `cb`.
    pub async fn post_with<T, F>(&self, config: RequestConfig, cb: F) -> T
    where
        F: FnOnce(Outcome) -> T,
    {
        stages::settle(self.dispatch(Method::Post, config).await, cb)
    }

    /// Send a PUT request and hand the settled outcome to `cb`.
    pub async fn put_with<T, F>(&self, config: RequestConfig, cb: F) -> T
    where
        F: FnOnce(Outcome) -> T,
    {
        stages::settle(self.dispatch(Method::Put, config).await, cb)
    }

    /// Send a DELETE request and hand the settled outcome to `cb`.
    pub async fn delete_with<T, F>(&self, config: RequestConfig, cb: F) -> T
    where
        F: FnOnce(Outcome) -> T,
    {
        stages::settle(self.dispatch(Method::Delete, config).await, cb)
    }

    /// Run one request through the full pipeline: request stages, merge,
    /// request transforms, the wire, status classification, response
    /// transforms, then the response/error stage pairs.
    pub(crate) async fn dispatch(&self, method: Method, config: RequestConfig) -> Result<Response> {
        let mut config = config;
        for stage in &self.request_stages {
            config = stage(config);
        }

        let mut prepared = merge::prepare(method, &self.defaults, self.base_url.as_ref(), config)?;

        if !self.request_transforms.is_empty() {
            let mut body = prepared.body.take().unwrap_or(serde_json::Value::Null);
            for transform in &self.request_transforms {
                body = transform(body, &prepared.headers);
            }
            prepared.body = (!body.is_null()).then_some(body);
        }

        let outcome = match self.exchange(&prepared).await {
            Ok(mut response) => {
                for transform in &self.response_transforms {
                    response.body = transform(std::mem::take(&mut response.body));
                }
                Ok(response)
            }
            Err(error) => Err(error),
        };

        stages::run_pairs(&self.stage_pairs, outcome)
    }

    /// Execute on the transport and classify the result: wire faults map to
    /// [`Error::Transport`], completed exchanges outside 2xx to
    /// [`Error::Status`] carrying the full response.
    async fn exchange(&self, prepared: &crate::data::PreparedRequest) -> Result<Response> {
        let response = self
            .transport
            .send(prepared)
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(Error::Status {
                status: response.status,
                response,
            })
        }
    }
}
