//! # Mock I/O Implementations for Testing
//!
//! Queue-backed message stream and a recording outbound stream.

use anyhow::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{MessageStream, OutboundStream};
use crate::bridge::events::{OutboundMessage, TransportEvent};

/// Pre-programmed transport events
#[derive(Debug, Default)]
pub struct MockMessageStream {
    events: VecDeque<TransportEvent>,
}

impl MockMessageStream {
    pub fn new(events: Vec<TransportEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: TransportEvent) {
        self.events.push_back(event);
    }
}

impl MessageStream for MockMessageStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<TransportEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

type SentHistory = Arc<Mutex<Vec<OutboundMessage>>>;

/// Records every outbound message.
///
/// Clones share the same history, so a test can keep one and hand the other
/// to the controller.
#[derive(Debug, Clone, Default)]
pub struct MockOutboundStream {
    sent: SentHistory,
    flushes: Arc<Mutex<usize>>,
}

impl MockOutboundStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap()
    }
}

impl OutboundStream for MockOutboundStream {
    fn send(&mut self, message: &OutboundMessage) -> Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}
