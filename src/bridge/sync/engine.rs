//! # Command Sync Engine
//!
//! Single authoritative handler for inbound command-registry messages. It is the
//! only writer to the registry on behalf of the remote side and the only holder
//! of registration tokens.
//!
//! ## State
//!
//! ```text
//!                    ┌──────────────────┐
//!  CommandMessage ──▶│ CommandSyncEngine │──▶ Outbox (command_list, commands, execute)
//!                    │                  │
//!                    │ • registry       │  every id, any origin
//!                    │ • custom set     │  ids the bridge registered, with tokens
//!                    │ • records        │  desired commands, survive reconnects
//!                    │ • liveness       │  gates outbound execute events
//!                    └──────────────────┘
//! ```
//!
//! Messages are processed one at a time to completion, so registry and custom
//! set mutations never interleave. Every mutation ends with a fresh listing.

use serde_json::Value;
use std::sync::Arc;

use super::publisher::CommandListingPublisher;
use crate::bridge::error::SyncError;
use crate::bridge::events::{BridgeEvent, CommandMessage, ModelTarget, Outbox};
use crate::bridge::models::{
    CommandOptions, CommandOrigin, CustomCommandSet, DesiredCommand, DesiredCommands,
    LivenessTracker, LivenessTransition,
};
use crate::bridge::registry::{CommandHandler, CommandRegistry, RegistrationToken};

#[derive(Debug)]
pub struct CommandSyncEngine<R: CommandRegistry> {
    registry: R,
    custom_commands: CustomCommandSet,
    records: DesiredCommands,
    liveness: LivenessTracker,
    outbox: Outbox,
    publisher: CommandListingPublisher,
}

impl<R: CommandRegistry> CommandSyncEngine<R> {
    /// Create an engine over an injected registry. The engine starts live.
    pub fn new(registry: R, outbox: Outbox) -> Self {
        Self {
            registry,
            custom_commands: CustomCommandSet::new(),
            records: DesiredCommands::new(),
            liveness: LivenessTracker::new(true),
            publisher: CommandListingPublisher::new(outbox.clone()),
            outbox,
        }
    }

    /// Replay persisted Desired-Command Records against the registry, then
    /// publish the records and the listing.
    ///
    /// Registry handles never survive a restart, so every record goes through
    /// the add path again. Records whose id is already taken are skipped.
    pub fn initialize(&mut self, records: Vec<DesiredCommand>) {
        self.records = DesiredCommands::from(records);

        let mut restored = 0;
        for options in self.records.to_vec() {
            match self.register(&options) {
                Ok(()) => restored += 1,
                Err(e) => tracing::warn!("Skipping replay of '{}': {}", options.id, e),
            }
        }
        tracing::info!(
            "Restored {} of {} desired commands",
            restored,
            self.records.len()
        );

        self.publisher.publish_records(&self.records);
        self.publisher.publish_listing(&self.registry);
    }

    /// Process one inbound message. Failures are logged, never propagated.
    pub fn handle_message(&mut self, message: CommandMessage) {
        let func = message.func();
        let result = match message {
            CommandMessage::Execute { id, args } => self.execute(&id, &args),
            CommandMessage::AddCommand(options) => self.add_command(options),
            CommandMessage::RemoveCommand { id } => self.remove_command(&id),
        };

        match result {
            Ok(()) => tracing::debug!("Handled '{}'", func),
            Err(e) if e.is_benign() => tracing::debug!("Ignored '{}': {}", func, e),
            Err(e) => tracing::warn!("Ignored '{}': {}", func, e),
        }
    }

    /// Dispatch-and-forget execution; unknown ids have no effect.
    pub fn execute(&self, id: &str, args: &Value) -> Result<(), SyncError> {
        if self.registry.execute(id, args) {
            Ok(())
        } else {
            Err(SyncError::UnknownCommandId(id.to_string()))
        }
    }

    pub fn add_command(&mut self, options: CommandOptions) -> Result<(), SyncError> {
        self.register(&options)?;
        self.records.upsert(options);
        self.publish();
        Ok(())
    }

    /// Remove a bridge-owned command and its record.
    ///
    /// Pre-existing registry entries are never touched. An id that is neither
    /// owned nor recorded changes nothing and publishes nothing.
    pub fn remove_command(&mut self, id: &str) -> Result<(), SyncError> {
        let token = self.custom_commands.take(id);
        let recorded = self.records.remove(id);

        if token.is_none() && !recorded {
            return Err(SyncError::UnknownCommandId(id.to_string()));
        }
        if let Some(token) = token {
            self.release(token);
        }

        self.publish();
        Ok(())
    }

    /// Feed a connection signal.
    ///
    /// When liveness is regained every held registration belongs to a stale
    /// session: all of them are released and the listing republished, leaving
    /// the remote side to declare its commands again. Records are kept.
    pub fn set_live(&mut self, live: bool) -> LivenessTransition {
        let transition = self.liveness.set_live(live);
        match transition {
            LivenessTransition::Regained => {
                tracing::info!(
                    "Connection regained, releasing {} bridge commands",
                    self.custom_commands.len()
                );
                for token in self.custom_commands.drain() {
                    self.release(token);
                }
                self.publisher.publish_listing(&self.registry);
            }
            LivenessTransition::Lost => tracing::info!("Connection lost"),
            LivenessTransition::Unchanged => {}
        }
        transition
    }

    pub fn is_live(&self) -> bool {
        self.liveness.is_live()
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn custom_command_ids(&self) -> Vec<String> {
        self.custom_commands.ids()
    }

    pub fn is_custom_command(&self, id: &str) -> bool {
        self.custom_commands.contains(id)
    }

    pub fn desired_commands(&self) -> &[DesiredCommand] {
        self.records.as_slice()
    }

    fn register(&mut self, options: &CommandOptions) -> Result<(), SyncError> {
        if self.registry.has_command(&options.id) {
            return Err(SyncError::DuplicateCommandId(options.id.clone()));
        }

        let handler = self.execute_callback(&options.id);
        let token = self
            .registry
            .add_command(options, CommandOrigin::CoreManaged, handler)?;
        if let Some(previous) = self.custom_commands.insert(token) {
            self.release(previous);
        }
        Ok(())
    }

    /// Callback for a bridge-owned command: forwards the invocation to the
    /// remote side while live, drops it otherwise.
    fn execute_callback(&self, id: &str) -> CommandHandler {
        let id = id.to_string();
        let liveness = self.liveness.handle();
        let outbox = self.outbox.clone();

        Arc::new(move |_args: &Value| {
            if !liveness.is_live() {
                tracing::debug!("Dropping execute of '{}' while not live", id);
                return;
            }
            outbox.emit_event(ModelTarget::Commands, BridgeEvent::Execute { id: id.clone() });
        })
    }

    fn release(&mut self, token: RegistrationToken) {
        if let Err(e) = self.registry.release(token) {
            tracing::debug!("Ignoring release failure: {}", e);
        }
    }

    fn publish(&self) {
        self.publisher.publish_records(&self.records);
        self.publisher.publish_listing(&self.registry);
    }
}
