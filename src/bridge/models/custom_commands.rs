//! # Custom-Command Set
//!
//! Tracks which registry entries the bridge itself created. Only ids present
//! here may be unregistered through the protocol.

use std::collections::HashMap;

use crate::bridge::registry::RegistrationToken;

#[derive(Debug, Default)]
pub struct CustomCommandSet {
    tokens: HashMap<String, RegistrationToken>,
}

impl CustomCommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a registration; hands back any token already held for the same id
    pub fn insert(&mut self, token: RegistrationToken) -> Option<RegistrationToken> {
        self.tokens.insert(token.id().to_string(), token)
    }

    /// Stop tracking `id`, handing its token to the caller for release
    pub fn take(&mut self, id: &str) -> Option<RegistrationToken> {
        self.tokens.remove(id)
    }

    /// Hand over every held token, leaving the set empty
    pub fn drain(&mut self) -> Vec<RegistrationToken> {
        self.tokens.drain().map(|(_, token)| token).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tokens.contains_key(id)
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.tokens.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
