//! HTTP client facade with interceptor chains, continuation callbacks, and
//! serial batch execution.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and exchange descriptors
//! - `core` - Pure transformations (contract checks, merging, stage resolution)
//! - `effects` - The transport abstraction and the client that drives it
//!
//! # Key behaviors
//!
//! - **Coupled interceptor pair**: registering a response or an error
//!   interceptor installs both sides of the pair, with the absent side
//!   defaulted to a pass-through. Registering neither installs no pair.
//! - **Continuation convention**: every `_with` request form hands the
//!   settled outcome — success or failure — to one callback and always
//!   resolves to its return value; a failure cannot escape a call that
//!   supplied a continuation.
//! - **Serial execution**: per-verb batches run strictly one at a time as
//!   pull-driven streams. Nothing is prefetched; dropping the stream halts
//!   issuance. Without a batch continuation the stream fail-fasts on the
//!   first error, with one it produces an element for every config.
//!
//! # Examples
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use tandem_client::{Client, RequestConfig};
//!
//! # async fn run() -> tandem_client::Result<()> {
//! let client = Client::new()?.set_base_url("http://127.0.0.1:3000")?;
//!
//! let mut people = client.serial_get(vec![
//!     RequestConfig::new("people/1"),
//!     RequestConfig::new("people/2"),
//! ]);
//! while let Some(person) = people.next().await {
//!     println!("{}", person?.body);
//! }
//! # Ok(())
//! # }
//! ```

mod core;
pub mod data;
mod effects;
mod error;
mod transform;

pub use data::{
    ErrorStage, InterceptorSet, Method, Outcome, PreparedRequest, RequestConfig, RequestStage,
    Response, ResponseStage,
};
pub use effects::{BoxStream, Client, Transport};
pub use error::{Error, Result};
pub use transform::{LogOptions, RequestTransform, ResponseTransform, TransformSet};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestTransport;
