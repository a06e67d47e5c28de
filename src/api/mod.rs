//! High-level library API: run the trigger operation end to end against an
//! already-validated [`TriggerRequest`]. Prefer this entrypoint over the
//! low-level `transport` module when embedding the trigger in another
//! program; it owns the observability contract (endpoint, body, status, and
//! response body are all logged before the caller sees the result).

use crate::error::Result;
use crate::logging::ActionLog;
use crate::request::TriggerRequest;
use crate::transport::{self, TriggerResponse};

/// Perform one trigger operation: assemble the endpoint and body, log them,
/// send the single blocking POST, and log the received status and body
/// unconditionally.
///
/// Returns `Ok` for every received response, success or not; callers
/// classify via [`TriggerResponse::is_success`]. Returns `Err` only when no
/// response was received (normalization happens earlier, at the CLI
/// boundary, so the request here is already valid).
pub fn trigger(request: &TriggerRequest, log: &dyn ActionLog) -> Result<TriggerResponse> {
    let endpoint = request.endpoint();
    let body = request.body();

    log.action(&format!(
        "Sending POST to {endpoint} with body: {}",
        serde_json::to_string(&body)?
    ));

    log.action("Initiating HTTP POST request to vectorization service");
    let response = transport::post_trigger(&endpoint, &body)?;

    log.action(&format!("Response code: {}", response.status));
    log.action(&format!("Response body: {}", response.body));

    Ok(response)
}
