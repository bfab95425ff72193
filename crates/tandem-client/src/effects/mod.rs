//! Effectful edge: the transport abstraction and the client that drives it.

mod client;
mod serial;
mod transport;

pub use client::Client;
pub use serial::BoxStream;
pub use transport::Transport;

#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
