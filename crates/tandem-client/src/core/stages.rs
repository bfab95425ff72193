//! Interceptor-set resolution and the continuation settling convention.

use crate::data::Outcome;
use crate::data::intercept::{InterceptorSet, RequestStage, StagePair};

/// What resolving an [`InterceptorSet`] at registration time produces:
/// at most one request stage and at most one response/error pair.
pub(crate) struct Resolved {
    pub(crate) request: Option<RequestStage>,
    pub(crate) pair: Option<StagePair>,
}

/// Apply the pairing rules to an interceptor set.
///
/// Response and error form a coupled pair: registering either side installs
/// both, with the absent side defaulted to a pass-through (a response flows
/// on as a success, an error flows on as the same failure). Registering
/// neither installs no pair at all. The request stage has no partner.
pub(crate) fn resolve(set: InterceptorSet) -> Resolved {
    let InterceptorSet {
        request,
        response,
        error,
    } = set;

    let pair = match (response, error) {
        (None, None) => None,
        (response, error) => Some(StagePair {
            on_response: response.unwrap_or_else(|| Box::new(|response| Ok(response))),
            on_error: error.unwrap_or_else(|| Box::new(|error| Err(error))),
        }),
    };

    Resolved { request, pair }
}

/// Fold a settled outcome through each installed pair, in installation
/// order. A success enters a pair's response side, a failure its error
/// side; each pair's output feeds the next.
pub(crate) fn run_pairs(pairs: &[StagePair], mut outcome: Outcome) -> Outcome {
    for pair in pairs {
        outcome = match outcome {
            Ok(response) => (pair.on_response)(response),
            Err(error) => (pair.on_error)(error),
        };
    }
    outcome
}

/// Hand a settled outcome to a continuation.
///
/// This is the whole of the continuation convention: the caller's function
/// receives the success or the failure as one plain value, and whatever it
/// returns becomes the call's result. Request methods and serial executors
/// share this one conversion, so a failure can never escape a call that
/// supplied a continuation.
pub(crate) fn settle<T, F>(outcome: Outcome, cb: F) -> T
where
    F: FnOnce(Outcome) -> T,
{
    cb(outcome)
}
