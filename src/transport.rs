//! Single blocking POST to the vectorization service.
//!
//! One attempt per invocation, bounded by [`REQUEST_TIMEOUT`]. A timeout is
//! indistinguishable from any other transport failure by design; both
//! surface as [`crate::Error::Transport`].

use std::time::Duration;

use crate::error::Result;
use crate::request::TriggerBody;

/// Fixed bound on the blocking call. Exceeding it is a transport failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A received HTTP response, reduced to what the trigger cares about. Not an
/// error by itself: classification happens via [`TriggerResponse::is_success`].
#[derive(Debug, Clone)]
pub struct TriggerResponse {
    pub status: u16,
    pub body: String,
}

impl TriggerResponse {
    /// Exactly HTTP 200 counts as success; everything else is a failure.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Send the trigger body to the given endpoint and collect status + body
/// text. Returns `Err` only when no response was received at all.
pub fn post_trigger(endpoint: &str, body: &TriggerBody) -> Result<TriggerResponse> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.post(endpoint).json(body).send()?;
    let status = response.status().as_u16();
    let body = response.text()?;

    Ok(TriggerResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exactly_200_is_success() {
        let ok = TriggerResponse {
            status: 200,
            body: String::new(),
        };
        assert!(ok.is_success());

        for status in [201, 204, 301, 400, 404, 500, 503] {
            let resp = TriggerResponse {
                status,
                body: String::new(),
            };
            assert!(!resp.is_success(), "status {status} must classify as failure");
        }
    }
}
