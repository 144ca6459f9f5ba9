//! # Outbound Messages
//!
//! Everything the bridge tells the remote side: fire-and-forget custom events
//! and state attribute updates.

use serde::{Deserialize, Serialize};

use super::messages::ModelTarget;
use crate::bridge::models::DesiredCommand;

/// Custom event content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BridgeEvent {
    /// A bridge-owned command was invoked locally
    Execute { id: String },
    /// The front-end finished initializing
    LabReady,
}

/// A single state attribute, serialized as `{"<name>": <value>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateAttribute {
    /// Ids of every command currently in the registry
    CommandList(Vec<String>),
    /// Desired-Command Records to persist and replay
    Commands(Vec<DesiredCommand>),
    Version(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum OutboundBody {
    Custom { content: BridgeEvent },
    Update { state: StateAttribute },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub model: ModelTarget,
    #[serde(flatten)]
    pub body: OutboundBody,
}

impl OutboundMessage {
    pub fn event(model: ModelTarget, content: BridgeEvent) -> Self {
        Self {
            model,
            body: OutboundBody::Custom { content },
        }
    }

    pub fn update(model: ModelTarget, state: StateAttribute) -> Self {
        Self {
            model,
            body: OutboundBody::Update { state },
        }
    }

    pub fn as_event(&self) -> Option<&BridgeEvent> {
        match &self.body {
            OutboundBody::Custom { content } => Some(content),
            OutboundBody::Update { .. } => None,
        }
    }

    pub fn as_update(&self) -> Option<&StateAttribute> {
        match &self.body {
            OutboundBody::Update { state } => Some(state),
            OutboundBody::Custom { .. } => None,
        }
    }
}
