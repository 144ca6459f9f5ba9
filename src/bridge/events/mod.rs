//! # Events Module
//!
//! Message vocabulary of the bridge, organized by direction:
//!
//! - `messages`: inbound control messages (remote -> front-end)
//! - `outbound`: custom events and state updates (front-end -> remote)
//! - `outbox`: the queue outbound messages travel through
//! - `transport`: what a message stream yields, including liveness signals

pub mod messages;
pub mod outbound;
pub mod outbox;
pub mod transport;

pub use messages::{CommandMessage, ExecutePayload, InboundEnvelope, ModelTarget, RemovePayload};
pub use outbound::{BridgeEvent, OutboundBody, OutboundMessage, StateAttribute};
pub use outbox::{Outbox, OutboxReceiver};
pub use transport::{ConnectionState, TransportEvent, WireFrame};
