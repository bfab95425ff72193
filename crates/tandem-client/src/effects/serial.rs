//! Serial executors: batch execution, one request at a time, surfaced as
//! pull-driven streams.
//!
//! Each pull issues exactly one transport call and awaits it before
//! producing the element, so nothing is prefetched: abandoning the stream
//! halts issuance, and calls can never overlap. Elements are produced in
//! input order.
//!
//! Two regimes per verb:
//! - **fail-fast** (`serial_get`, ...): the first failure is produced as
//!   the final element and no further configs are attempted;
//! - **fully lazy** (`serial_get_with`, ...): every settled outcome is
//!   handed to the batch continuation and execution continues through the
//!   whole batch; the stream itself never fails.

use std::pin::Pin;

use futures_util::Stream;
use futures_util::stream;

use super::client::Client;
use super::transport::Transport;
use crate::core::stages;
use crate::data::{Method, Outcome, RequestConfig, Response};
use crate::error::Result;

/// A boxed stream type for serial execution results.
///
/// This type alias simplifies the stream type the serial executors return.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

struct SerialState {
    configs: std::vec::IntoIter<RequestConfig>,
    halted: bool,
}

impl<C: Transport> Client<C> {
    /// Issue GETs one at a time, fail-fast.
    pub fn serial_get(&self, configs: Vec<RequestConfig>) -> BoxStream<'_, Result<Response>> {
        self.serial(Method::Get, configs)
    }

    /// Issue POSTs one at a time, fail-fast.
    pub fn serial_post(&self, configs: Vec<RequestConfig>) -> BoxStream<'_, Result<Response>> {
        self.serial(Method::Post, configs)
    }

    /// Issue PUTs one at a time, fail-fast.
    pub fn serial_put(&self, configs: Vec<RequestConfig>) -> BoxStream<'_, Result<Response>> {
        self.serial(Method::Put, configs)
    }

    /// Issue DELETEs one at a time, fail-fast.
    pub fn serial_delete(&self, configs: Vec<RequestConfig>) -> BoxStream<'_, Result<Response>> {
        self.serial(Method::Delete, configs)
    }

    /// Issue GETs one at a time, handing each settled outcome to `cb`.
    pub fn serial_get_with<'a, T, F>(
        &'a self,
        configs: Vec<RequestConfig>,
        cb: F,
    ) -> BoxStream<'a, T>
    where
        T: Send + 'a,
        F: FnMut(Outcome) -> T + Send + 'a,
    {
        self.serial_with(Method::Get, configs, cb)
    }

    /// Issue POSTs one at a time, handing each settled outcome to `cb`.
    pub fn serial_post_with<'a, T, F>(
        &'a self,
        configs: Vec<RequestConfig>,
        cb: F,
    ) -> BoxStream<'a, T>
    where
        T: Send + 'a,
        F: FnMut(Outcome) -> T + Send + 'a,
    {
        self.serial_with(Method::Post, configs, cb)
    }

    /// Issue PUTs one at a time, handing each settled outcome to `cb`.
    pub fn serial_put_with<'a, T, F>(
        &'a self,
        configs: Vec<RequestConfig>,
        cb: F,
    ) -> BoxStream<'a, T>
    where
        T: Send + 'a,
        F: FnMut(Outcome) -> T + Send + 'a,
    {
        self.serial_with(Method::Put, configs, cb)
    }

    /// Issue DELETEs one at a time, handing each settled outcome to `cb`.
    pub fn serial_delete_with<'a, T, F>(
        &'a self,
        configs: Vec<RequestConfig>,
        cb: F,
    ) -> BoxStream<'a, T>
    where
        T: Send + 'a,
        F: FnMut(Outcome) -> T + Send + 'a,
    {
        self.serial_with(Method::Delete, configs, cb)
    }

    /// Fail-fast regime: produce raw outcomes until the first failure,
    /// which is produced and then terminates the stream. The failing
    /// error is yielded as-is, not re-wrapped.
    fn serial(&self, method: Method, configs: Vec<RequestConfig>) -> BoxStream<'_, Result<Response>> {
        let state = SerialState {
            configs: configs.into_iter(),
            halted: false,
        };
        Box::pin(stream::unfold(state, move |mut state| async move {
            if state.halted {
                return None;
            }
            let config = state.configs.next()?;
            match self.dispatch(method, config).await {
                Ok(response) => Some((Ok(response), state)),
                Err(error) => {
                    state.halted = true;
                    Some((Err(error), state))
                }
            }
        }))
    }

    /// Fully-lazy regime: every config is attempted in order and each
    /// settled outcome is converted to a produced value by the
    /// continuation.
    fn serial_with<'a, T, F>(
        &'a self,
        method: Method,
        configs: Vec<RequestConfig>,
        cb: F,
    ) -> BoxStream<'a, T>
    where
        T: Send + 'a,
        F: FnMut(Outcome) -> T + Send + 'a,
    {
        Box::pin(stream::unfold(
            (configs.into_iter(), cb),
            move |(mut configs, mut cb)| async move {
                let config = configs.next()?;
                let outcome = self.dispatch(method, config).await;
                let item = stages::settle(outcome, &mut cb);
                Some((item, (configs, cb)))
            },
        ))
    }
}
