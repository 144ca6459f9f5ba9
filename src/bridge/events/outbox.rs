//! # Outbox
//!
//! Outbound queue between the models and the transport. Models push messages
//! as they happen; the controller drains the queue after each processed inbound
//! event and hands the messages to the outbound stream in order.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::messages::ModelTarget;
use super::outbound::{BridgeEvent, OutboundMessage, StateAttribute};

/// Sending half, cheap to clone into command callbacks
#[derive(Debug, Clone)]
pub struct Outbox {
    sender: UnboundedSender<OutboundMessage>,
}

/// Receiving half, owned by whoever writes to the transport
#[derive(Debug)]
pub struct OutboxReceiver {
    receiver: UnboundedReceiver<OutboundMessage>,
}

impl Outbox {
    pub fn channel() -> (Outbox, OutboxReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Outbox { sender }, OutboxReceiver { receiver })
    }

    pub fn send(&self, message: OutboundMessage) {
        if self.sender.send(message).is_err() {
            tracing::debug!("Outbox receiver dropped, discarding outbound message");
        }
    }

    pub fn emit_event(&self, model: ModelTarget, event: BridgeEvent) {
        self.send(OutboundMessage::event(model, event));
    }

    pub fn set_state(&self, model: ModelTarget, state: StateAttribute) {
        self.send(OutboundMessage::update(model, state));
    }
}

impl OutboxReceiver {
    /// Take every message queued so far without waiting
    pub fn drain(&mut self) -> Vec<OutboundMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = self.receiver.try_recv() {
            messages.push(message);
        }
        messages
    }
}
