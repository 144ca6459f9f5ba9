//! # Protocol Errors
//!
//! Failures the sync protocol can run into. None of these are reported to the
//! remote side; the dispatcher logs them and moves on to the next message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// `addCommand` for an id the registry already knows
    #[error("command '{0}' is already registered")]
    DuplicateCommandId(String),

    /// `execute` or `removeCommand` for an id the bridge cannot act on
    #[error("command '{0}' is unknown or not managed by the bridge")]
    UnknownCommandId(String),

    /// Registration token no longer matches a live registry entry
    #[error("registration for command '{0}' was already released")]
    StaleHandle(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("malformed payload for '{func}': {source}")]
    MalformedPayload {
        func: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SyncError {
    /// Errors that are expected during normal operation and only worth a debug line
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::UnknownCommandId(_) | Self::StaleHandle(_))
    }
}
