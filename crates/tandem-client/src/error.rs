//! Error types for tandem-client.

use thiserror::Error;

use crate::data::Response;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("contract violation: {0}")]
    Contract(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// The full exchange that produced the failing status. Kept so an
        /// HTTP-level failure stays distinguishable from a wire fault and
        /// error interceptors can inspect the server's reply.
        response: Response,
    },

    #[error("body decode error: {0}")]
    Decode(#[source] serde_json::Error),
}
