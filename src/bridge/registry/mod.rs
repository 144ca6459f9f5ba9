//! # Command Registry Capability
//!
//! The registry is an external collaborator: a table of named, executable
//! actions. The sync engine receives one at construction and is the only writer
//! on behalf of the remote side.
//!
//! ## Ownership
//!
//! ```text
//! SyncEngine ──owns──▶ CustomCommandSet ──holds──▶ RegistrationToken ──release──▶ Registry
//! ```
//!
//! Releasing a token is the only way to unregister a command. Tokens are not
//! `Clone`, so a single holder decides when a registration ends.

use serde_json::Value;
use std::sync::Arc;

use crate::bridge::error::SyncError;
use crate::bridge::models::{CommandInfo, CommandOptions, CommandOrigin};

pub mod in_memory;

pub use in_memory::InMemoryCommandRegistry;

/// Callback invoked when a command is executed
pub type CommandHandler = Arc<dyn Fn(&Value) + Send + Sync>;

/// Opaque proof of a registration, returned by [`CommandRegistry::add_command`]
#[must_use = "a dropped token can never unregister its command"]
#[derive(Debug, PartialEq, Eq)]
pub struct RegistrationToken {
    id: String,
    serial: u64,
}

impl RegistrationToken {
    /// Registries mint tokens; `serial` must be unique per registration.
    pub fn new(id: impl Into<String>, serial: u64) -> Self {
        Self {
            id: id.into(),
            serial,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

/// Table of executable commands the bridge mutates and queries
pub trait CommandRegistry: Send {
    fn has_command(&self, id: &str) -> bool;

    /// Register a command; fails with `DuplicateCommandId` if the id is taken
    fn add_command(
        &mut self,
        options: &CommandOptions,
        origin: CommandOrigin,
        handler: CommandHandler,
    ) -> Result<RegistrationToken, SyncError>;

    /// Unregister the command behind `token`.
    ///
    /// Returns `StaleHandle` when the registration is already gone.
    fn release(&mut self, token: RegistrationToken) -> Result<(), SyncError>;

    /// Invoke a command; returns `false` without side effects for unknown ids
    fn execute(&self, id: &str, args: &Value) -> bool;

    /// Ids of every registered command, whatever its origin
    fn list_commands(&self) -> Vec<String>;

    fn command_info(&self, id: &str) -> Option<CommandInfo>;

    fn command_count(&self) -> usize {
        self.list_commands().len()
    }
}
