//! # Bridge Module
//!
//! Front-end side of the bridge. The backend drives lightweight model handles;
//! this module holds the real stateful objects and mirrors their state back.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐  TransportEvent  ┌──────────────────┐  CommandMessage  ┌──────────────────┐
//! │ MessageStream │────────────────▶│ BridgeController │────────────────▶│ CommandSyncEngine │
//! └──────────────┘                  │                  │──▶ ShellProxy    │  • registry       │
//!                                   │                  │                  │  • custom set     │
//! ┌──────────────┐  OutboundMessage │                  │◀──── Outbox ─────│  • records        │
//! │OutboundStream │◀────────────────│                  │                  │  • liveness       │
//! └──────────────┘                  └──────────────────┘                  └──────────────────┘
//! ```

pub mod controllers;
pub mod error;
pub mod events;
pub mod io;
pub mod models;
pub mod proxies;
pub mod registry;
pub mod store;
pub mod sync;

// Re-export core types
pub use controllers::{BridgeController, ControllerOptions};
pub use error::SyncError;
pub use events::{
    BridgeEvent, CommandMessage, InboundEnvelope, ModelTarget, OutboundMessage, Outbox,
    OutboxReceiver, StateAttribute, TransportEvent,
};
pub use models::{CommandOptions, CommandOrigin, DesiredCommand};
pub use registry::{CommandHandler, CommandRegistry, InMemoryCommandRegistry, RegistrationToken};
pub use store::JsonFileStore;
pub use sync::CommandSyncEngine;
