use std::future::Future;

use crate::data::{PreparedRequest, Response};

/// Asynchronous HTTP execution abstraction.
///
/// One call is one exchange. Implementations own connection management,
/// TLS, redirects, and wire-level timeout enforcement. Any completed
/// exchange is a transport-level success regardless of HTTP status; the
/// client layers status classification on top.
///
/// # Implementations
///
/// - [`ReqwestTransport`]: production implementation using `reqwest`
/// - In-file mock transports in the integration tests
pub trait Transport: Send + Sync {
    /// Error type for wire-level faults.
    type Error: std::error::Error + Send + 'static;

    /// Execute one exchange.
    ///
    /// # Errors
    ///
    /// Returns an error only for wire-level faults (DNS failure, connect
    /// refusal, timeout). An HTTP error status is a completed exchange and
    /// is returned as a [`Response`].
    fn send(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = std::result::Result<Response, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::Method;
    use crate::error::{Error, Result};

    /// Production transport backed by a shared `reqwest::Client`.
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Create a transport with reqwest's default configuration.
        pub fn new() -> Result<Self> {
            let client = reqwest::Client::builder()
                .build()
                .map_err(|e| Error::Transport(e.to_string()))?;
            Ok(Self { client })
        }

        /// Wrap an already-configured `reqwest::Client`.
        pub fn from_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Transport for ReqwestTransport {
        type Error = reqwest::Error;

        async fn send(
            &self,
            request: &PreparedRequest,
        ) -> std::result::Result<Response, Self::Error> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(timeout) = request.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let url = response.url().to_string();
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.to_string(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect();
            let text = response.text().await?;
            let body = match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(_) => serde_json::Value::String(text),
            };

            Ok(Response {
                status,
                url,
                headers,
                body,
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
