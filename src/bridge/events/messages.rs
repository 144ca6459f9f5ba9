//! # Inbound Messages
//!
//! Control messages arriving from the remote side. Every message is addressed to
//! one front-end model and carries a `func` tag plus an operation-specific payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::bridge::error::SyncError;
use crate::bridge::models::CommandOptions;

/// Front-end model a message is addressed to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTarget {
    #[default]
    Commands,
    Shell,
    FrontEnd,
}

/// Raw message as it comes off the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundEnvelope {
    #[serde(default)]
    pub model: ModelTarget,
    pub func: String,
    #[serde(default)]
    pub payload: Value,
}

impl InboundEnvelope {
    pub fn new(model: ModelTarget, func: impl Into<String>, payload: Value) -> Self {
        Self {
            model,
            func: func.into(),
            payload,
        }
    }

    pub fn commands(func: impl Into<String>, payload: Value) -> Self {
        Self::new(ModelTarget::Commands, func, payload)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExecutePayload {
    pub id: String,
    #[serde(default = "empty_args")]
    pub args: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemovePayload {
    pub id: String,
}

fn empty_args() -> Value {
    Value::Object(Map::new())
}

/// Message addressed to the command registry model
#[derive(Debug, Clone, PartialEq)]
pub enum CommandMessage {
    Execute { id: String, args: Value },
    AddCommand(CommandOptions),
    RemoveCommand { id: String },
}

impl CommandMessage {
    pub fn parse(envelope: &InboundEnvelope) -> Result<Self, SyncError> {
        let payload = envelope.payload.clone();
        let malformed = |source| SyncError::MalformedPayload {
            func: envelope.func.clone(),
            source,
        };

        match envelope.func.as_str() {
            "execute" => {
                let ExecutePayload { id, args } =
                    serde_json::from_value(payload).map_err(malformed)?;
                Ok(Self::Execute { id, args })
            }
            "addCommand" => Ok(Self::AddCommand(
                serde_json::from_value(payload).map_err(malformed)?,
            )),
            "removeCommand" => {
                let RemovePayload { id } = serde_json::from_value(payload).map_err(malformed)?;
                Ok(Self::RemoveCommand { id })
            }
            other => Err(SyncError::UnknownFunction(other.to_string())),
        }
    }

    pub fn func(&self) -> &'static str {
        match self {
            Self::Execute { .. } => "execute",
            Self::AddCommand(_) => "addCommand",
            Self::RemoveCommand { .. } => "removeCommand",
        }
    }
}
