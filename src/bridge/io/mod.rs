//! # I/O Abstraction Layer
//!
//! Trait abstractions for the inbound message stream and the outbound stream,
//! so the controller can be driven by stdio in production and by queues in tests.
//!
//! ## Architecture
//!
//! ```text
//! Production:  BridgeController ──▶ StdioMessageStream   ──▶ stdin (JSON lines)
//!                               ──▶ JsonLinesOutbound    ──▶ stdout (JSON lines)
//!
//! Testing:     BridgeController ──▶ MockMessageStream    ──▶ VecDeque<TransportEvent>
//!                               ──▶ MockOutboundStream   ──▶ Vec<OutboundMessage>
//! ```

use anyhow::Result;
use std::time::Duration;

use crate::bridge::events::{OutboundMessage, TransportEvent};

pub mod mock;
pub mod stdio;

pub use mock::{MockMessageStream, MockOutboundStream};
pub use stdio::{JsonLinesOutboundStream, StdioMessageStream};

/// Inbound side of the transport
pub trait MessageStream: Send {
    /// Check if an event is available within `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event. Only call after `poll()` returned true.
    fn read(&mut self) -> Result<TransportEvent>;

    /// True once no more events will ever be produced (test sources only)
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Outbound side of the transport
pub trait OutboundStream: Send {
    fn send(&mut self, message: &OutboundMessage) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}
