//! # In-Memory Command Registry
//!
//! Process-local registry used by the binary and by tests. Ids are kept in a
//! `BTreeMap`, so listings come out sorted.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::{CommandHandler, CommandRegistry, RegistrationToken};
use crate::bridge::error::SyncError;
use crate::bridge::models::{CommandInfo, CommandOptions, CommandOrigin};

struct Entry {
    info: CommandInfo,
    handler: CommandHandler,
    serial: u64,
}

#[derive(Default)]
pub struct InMemoryCommandRegistry {
    entries: BTreeMap<String, Entry>,
    next_serial: u64,
}

impl InMemoryCommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command owned by other application logic.
    ///
    /// Its token is discarded, so the bridge can never unregister it.
    pub fn register_builtin(
        &mut self,
        options: &CommandOptions,
        handler: CommandHandler,
    ) -> Result<(), SyncError> {
        let _ = self.add_command(options, CommandOrigin::PreExisting, handler)?;
        Ok(())
    }

    /// Register a pre-existing command that does nothing when executed
    pub fn with_builtin(mut self, id: &str) -> Self {
        let handler: CommandHandler = Arc::new(|_: &Value| {});
        if let Err(e) = self.register_builtin(&CommandOptions::new(id), handler) {
            tracing::warn!("Skipping builtin command: {}", e);
        }
        self
    }
}

impl CommandRegistry for InMemoryCommandRegistry {
    fn has_command(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn add_command(
        &mut self,
        options: &CommandOptions,
        origin: CommandOrigin,
        handler: CommandHandler,
    ) -> Result<RegistrationToken, SyncError> {
        if self.has_command(&options.id) {
            return Err(SyncError::DuplicateCommandId(options.id.clone()));
        }

        self.next_serial += 1;
        let serial = self.next_serial;
        self.entries.insert(
            options.id.clone(),
            Entry {
                info: CommandInfo::from_options(options, origin),
                handler,
                serial,
            },
        );
        tracing::debug!("Registered command '{}' ({:?})", options.id, origin);

        Ok(RegistrationToken::new(options.id.clone(), serial))
    }

    fn release(&mut self, token: RegistrationToken) -> Result<(), SyncError> {
        match self.entries.get(token.id()) {
            Some(entry) if entry.serial == token.serial() => {
                self.entries.remove(token.id());
                tracing::debug!("Unregistered command '{}'", token.id());
                Ok(())
            }
            _ => Err(SyncError::StaleHandle(token.id().to_string())),
        }
    }

    fn execute(&self, id: &str, args: &Value) -> bool {
        // Clone the handler out so a command may re-enter the registry read path
        let handler = match self.entries.get(id) {
            Some(entry) => Arc::clone(&entry.handler),
            None => return false,
        };
        handler(args);
        true
    }

    fn list_commands(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn command_info(&self, id: &str) -> Option<CommandInfo> {
        self.entries.get(id).map(|entry| entry.info.clone())
    }

    fn command_count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for InMemoryCommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryCommandRegistry")
            .field("commands", &self.entries.keys().collect::<Vec<_>>())
            .field("next_serial", &self.next_serial)
            .finish()
    }
}
