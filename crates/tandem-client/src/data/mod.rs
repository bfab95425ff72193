//! Immutable configuration and exchange descriptors.

pub mod config;
pub mod intercept;
pub mod response;

pub use config::{Method, PreparedRequest, RequestConfig};
pub use intercept::{ErrorStage, InterceptorSet, RequestStage, ResponseStage};
pub use response::{Outcome, Response};
