//! Errors surfaced to the hosting platform
//!
//! Validation failures are not errors; they become `ElicitSlot` responses.
//! Everything here aborts the turn.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialogError {
    /// No handler is registered for the intent
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// Inbound event does not match the request shape
    #[error("Malformed intent request: {0}")]
    MalformedRequest(#[source] serde_json::Error),

    #[error("Failed to serialize dialog response: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type DialogResult<T> = Result<T, DialogError>;
