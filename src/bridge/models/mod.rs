//! # Models
//!
//! State owned by the sync engine: command records, the set of bridge-owned
//! registrations and the connection liveness flag.

pub mod command;
pub mod custom_commands;
pub mod liveness;
pub mod records;

pub use command::{CommandInfo, CommandOptions, CommandOrigin, DesiredCommand};
pub use custom_commands::CustomCommandSet;
pub use liveness::{LivenessHandle, LivenessTracker, LivenessTransition};
pub use records::DesiredCommands;
