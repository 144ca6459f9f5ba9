//! # Desired-Command Records
//!
//! Durable list of commands the remote side asked for. It outlives registry
//! handles: disconnects leave it alone and initialization replays it.

use super::command::DesiredCommand;

/// Ordered list of desired commands, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredCommands {
    records: Vec<DesiredCommand>,
}

impl DesiredCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same id in place
    pub fn upsert(&mut self, record: DesiredCommand) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Remove every record with the given id, returning whether any was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn as_slice(&self) -> &[DesiredCommand] {
        &self.records
    }

    pub fn to_vec(&self) -> Vec<DesiredCommand> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<DesiredCommand>> for DesiredCommands {
    fn from(records: Vec<DesiredCommand>) -> Self {
        let mut desired = Self::new();
        for record in records {
            desired.upsert(record);
        }
        desired
    }
}
