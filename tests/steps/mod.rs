//! Step definitions for Cucumber tests
//!
//! Steps are organized by feature domain:
//! - `commands` - Adding, removing and executing commands
//! - `connection` - Liveness changes and session restarts
//! - `shell` - Widget placement through the shell proxy

pub mod commands;
pub mod connection;
pub mod shell;
