//! # Transport Events
//!
//! What the message stream yields: protocol messages interleaved with
//! out-of-band connection signals.

use serde::{Deserialize, Serialize};

use super::messages::InboundEnvelope;

#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    Message(InboundEnvelope),
    ConnectionEstablished,
    ConnectionLost,
    /// The stream ended; no further events will arrive
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Established,
    Lost,
}

/// One line of the stdio wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireFrame {
    Connection { connection: ConnectionState },
    Message(InboundEnvelope),
}

impl From<WireFrame> for TransportEvent {
    fn from(frame: WireFrame) -> Self {
        match frame {
            WireFrame::Connection {
                connection: ConnectionState::Established,
            } => TransportEvent::ConnectionEstablished,
            WireFrame::Connection {
                connection: ConnectionState::Lost,
            } => TransportEvent::ConnectionLost,
            WireFrame::Message(envelope) => TransportEvent::Message(envelope),
        }
    }
}
