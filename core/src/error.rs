//! Error types for the item gateway.
//!
//! # Design
//! `Transport` and `Format` are the two failures the store has to survive:
//! the service answered with a non-2xx status, or it answered with a body we
//! cannot read. `Connection` covers requests that never got an answer at all.
//! None of these cross into the presentation layer; the store collapses them
//! into fixed messages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The service responded with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Format(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// No response was received (DNS, refused connection, broken body stream).
    #[error("connection failed: {0}")]
    Connection(#[from] reqwest::Error),
}

impl GatewayError {
    /// Status code of a `Transport` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
