//! Shared utilities for use cases.
//!
//! Contains the timeout-bounded service call helper used by both
//! ResultController and RunQuiz.

use crate::ports::activity::{ActivityNotifier, RequestKind};
use crate::ports::scoring_gateway::GatewayError;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Run one service call, bounded by `timeout`, with activity callbacks.
///
/// An elapsed timeout resolves to [`GatewayError::Timeout`]; the call is
/// never retried.
pub(crate) async fn bounded_call<T, F>(
    kind: RequestKind,
    timeout: Option<Duration>,
    activity: &dyn ActivityNotifier,
    call: F,
) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    activity.on_request_start(kind);
    debug!(request = kind.as_str(), ?timeout, "Service call started");

    let result = match timeout {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .unwrap_or(Err(GatewayError::Timeout)),
        None => call.await,
    };

    activity.on_request_complete(kind, result.is_ok());
    debug!(request = kind.as_str(), success = result.is_ok(), "Service call finished");
    result
}
