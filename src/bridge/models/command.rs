//! # Command Records
//!
//! Serializable descriptions of commands as the remote side declares them, plus
//! the read-only view the registry exposes for each entry.

use serde::{Deserialize, Serialize};

/// Options for a command the remote side wants registered.
///
/// The same shape is kept as the Desired-Command Record and replayed verbatim
/// when the bridge is initialized again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOptions {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
}

/// A command description retained across sessions
pub type DesiredCommand = CommandOptions;

impl CommandOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caption: None,
            label: None,
            icon_class: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_icon_class(mut self, icon_class: impl Into<String>) -> Self {
        self.icon_class = Some(icon_class.into());
        self
    }
}

/// Who created a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOrigin {
    /// Registered by other application logic; the bridge never removes it
    PreExisting,
    /// Registered through the bridge protocol
    CoreManaged,
}

/// Read-only snapshot of a registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub id: String,
    pub caption: Option<String>,
    pub label: Option<String>,
    pub icon_class: Option<String>,
    pub origin: CommandOrigin,
}

impl CommandInfo {
    pub fn from_options(options: &CommandOptions, origin: CommandOrigin) -> Self {
        Self {
            id: options.id.clone(),
            caption: options.caption.clone(),
            label: options.label.clone(),
            icon_class: options.icon_class.clone(),
            origin,
        }
    }
}
