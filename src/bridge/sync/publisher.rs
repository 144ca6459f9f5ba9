//! # Command Listing Publisher
//!
//! Publishes the command listing and the Desired-Command Records. The listing
//! is always recomputed from the registry at publish time, never patched.

use crate::bridge::events::{ModelTarget, Outbox, StateAttribute};
use crate::bridge::models::DesiredCommands;
use crate::bridge::registry::CommandRegistry;

#[derive(Debug, Clone)]
pub struct CommandListingPublisher {
    outbox: Outbox,
}

impl CommandListingPublisher {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }

    pub fn publish_listing<R: CommandRegistry + ?Sized>(&self, registry: &R) {
        let listing = registry.list_commands();
        tracing::debug!("Publishing command listing ({} commands)", listing.len());
        self.outbox
            .set_state(ModelTarget::Commands, StateAttribute::CommandList(listing));
    }

    pub fn publish_records(&self, records: &DesiredCommands) {
        self.outbox.set_state(
            ModelTarget::Commands,
            StateAttribute::Commands(records.to_vec()),
        );
    }
}
