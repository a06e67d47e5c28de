//! Crate-level error type and `Result` alias.
//!
//! One variant per failure class that prevents a response from being
//! received: normalization, body serialization, transport. A non-200
//! response is not an `Error`; it is a classified [`crate::TriggerResponse`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid clients list: {0}")]
    Normalize(#[from] crate::clients::NormalizeError),

    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
