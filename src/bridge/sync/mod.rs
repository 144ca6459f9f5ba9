//! # Sync Module
//!
//! The command-registry synchronization protocol: the engine that applies
//! inbound messages and the publisher that mirrors registry state back.

pub mod engine;
pub mod publisher;

pub use engine::CommandSyncEngine;
pub use publisher::CommandListingPublisher;
